use crate::layout::Shell;
use crate::system::settings::context::SettingsContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Настройки (ключ, модель) доступны всему приложению через контекст
    let settings = SettingsContext::new();
    settings.load();
    provide_context(settings);

    view! {
        <Shell />
    }
}
