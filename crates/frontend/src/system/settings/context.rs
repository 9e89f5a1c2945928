use super::api::fetch_settings;
use leptos::prelude::*;

/// Контекст настроек: ключ из поля UI, выбранная модель,
/// сведения с сервера (/api/system/settings)
#[derive(Clone, Copy)]
pub struct SettingsContext {
    /// Ключ, введённый в сайдбаре; пустой = использовать ключ сервера
    pub api_key: RwSignal<String>,
    pub model: RwSignal<String>,
    pub has_env_key: RwSignal<bool>,
    pub models: RwSignal<Vec<String>>,
}

impl SettingsContext {
    pub fn new() -> Self {
        Self {
            api_key: RwSignal::new(String::new()),
            model: RwSignal::new("gemini-1.5-flash".to_string()),
            has_env_key: RwSignal::new(false),
            models: RwSignal::new(vec![
                "gemini-1.5-flash".to_string(),
                "gemini-1.5-pro".to_string(),
            ]),
        }
    }

    /// Подгрузить настройки с сервера
    pub fn load(&self) {
        let ctx = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_settings().await {
                Ok(settings) => {
                    ctx.has_env_key.set(settings.has_env_key);
                    ctx.model.set(settings.default_model);
                    ctx.models.set(settings.models);
                }
                Err(e) => {
                    log::warn!("Failed to load settings: {}", e);
                }
            }
        });
    }

    /// Есть ли чем авторизоваться: ключ из поля или ключ сервера
    pub fn key_available(&self) -> bool {
        !self.api_key.get().trim().is_empty() || self.has_env_key.get()
    }
}

impl Default for SettingsContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>().expect("SettingsContext not found")
}
