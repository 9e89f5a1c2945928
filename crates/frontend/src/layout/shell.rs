use crate::layout::sidebar::Sidebar;
use crate::usecases::u101_recommendation::ui::AssistantPage;
use leptos::prelude::*;

/// Каркас приложения: сайдбар настроек слева, центрированная основная колонка
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div style="display: flex; min-height: 100vh; background: var(--colorNeutralBackground3, #f5f5f5);">
            <aside style="width: 280px; flex-shrink: 0; padding: 20px; background: var(--colorNeutralBackground1, #fff); border-right: 1px solid var(--colorNeutralStroke2, #e0e0e0);">
                <Sidebar />
            </aside>
            <main style="flex: 1; display: flex; justify-content: center; padding: 24px;">
                <div style="width: 100%; max-width: 760px;">
                    <AssistantPage />
                </div>
            </main>
        </div>
    }
}
