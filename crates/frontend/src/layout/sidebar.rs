use crate::system::settings::api;
use crate::system::settings::context::use_settings;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Сайдбар настроек: ключ Gemini API, выбор модели, проверка подключения
#[component]
pub fn Sidebar() -> impl IntoView {
    let settings = use_settings();

    let is_testing = RwSignal::new(false);
    let test_result = RwSignal::new(Option::<(bool, String)>::None);

    let on_test = move |_| {
        if is_testing.get_untracked() {
            return;
        }
        is_testing.set(true);
        test_result.set(None);

        let model = settings.model.get_untracked();
        let api_key = settings.api_key.get_untracked();

        spawn_local(async move {
            match api::test_connection(&model, &api_key).await {
                Ok(result) => test_result.set(Some((result.success, result.message))),
                Err(e) => test_result.set(Some((false, e))),
            }
            is_testing.set(false);
        });
    };

    view! {
        <h3 style="margin-bottom: 16px;">"⚙ Settings"</h3>

        <div style="margin-bottom: 16px;">
            <label
                for="api-key"
                style="display: block; margin-bottom: 4px; font-size: 13px; font-weight: 600;"
            >
                "Gemini API key"
            </label>
            <input
                id="api-key"
                type="password"
                style="width: 100%; padding: 6px 8px; border: 1px solid var(--colorNeutralStroke1, #ccc); border-radius: 4px; box-sizing: border-box;"
                prop:value=move || settings.api_key.get()
                on:input=move |ev| settings.api_key.set(event_target_value(&ev))
                placeholder="Paste your Google Gemini API key"
            />
            {move || {
                settings
                    .has_env_key
                    .get()
                    .then(|| {
                        view! {
                            <div style="margin-top: 6px; font-size: 12px; color: var(--colorNeutralForeground3, #777);">
                                "GOOGLE_API_KEY is set on the server — leave blank to use it."
                            </div>
                        }
                    })
            }}
        </div>

        <div style="margin-bottom: 16px;">
            <label style="display: block; margin-bottom: 4px; font-size: 13px; font-weight: 600;">
                "Model"
            </label>
            <Select value=settings.model>
                <For
                    each=move || settings.models.get()
                    key=|m| m.clone()
                    let:m
                >
                    <option value=m.clone()>{m.clone()}</option>
                </For>
            </Select>
        </div>

        <div>
            <Button appearance=ButtonAppearance::Secondary on_click=on_test>
                {move || if is_testing.get() { "Testing..." } else { "Test connection" }}
            </Button>
            {move || {
                test_result
                    .get()
                    .map(|(success, message)| {
                        let color = if success {
                            "var(--colorStatusSuccessForeground1, #0e700e)"
                        } else {
                            "var(--colorStatusDangerForeground1, #b10e1c)"
                        };
                        view! {
                            <div style=format!(
                                "margin-top: 8px; font-size: 12px; color: {};",
                                color,
                            )>{message}</div>
                        }
                    })
            }}
        </div>
    }
}
