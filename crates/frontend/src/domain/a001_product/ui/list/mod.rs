pub mod state;

use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

/// Карточки товаров в сетке по три колонки
///
/// Пустой результат после выполненного поиска — инфобокс, не ошибка.
#[component]
#[allow(non_snake_case)]
pub fn ProductCards(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] is_loaded: Signal<bool>,
    #[prop(default = "Matching Products")] title: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || is_loaded.get()>
            <Show
                when=move || !products.get().is_empty()
                fallback=|| {
                    view! {
                        <div style="padding: 12px; margin-top: 16px; background: var(--colorBrandBackground2, #eaf3ff); border-radius: 8px;">
                            "No products matched your filters."
                        </div>
                    }
                }
            >
                <h3 style="margin-top: 20px;">{title}</h3>
                <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;">
                    <For
                        each=move || products.get()
                        key=|p| p.name.clone()
                        let:p
                    >
                        <div style="background: var(--colorNeutralBackground1, #fff); border: 1px solid var(--colorNeutralStroke2, #e0e0e0); border-radius: 8px; padding: 12px;">
                            <img
                                src=p.image.clone()
                                alt=p.name.clone()
                                style="width: 100%; height: 140px; object-fit: cover; border-radius: 6px;"
                            />
                            <div style="margin-top: 8px; font-weight: bold;">{p.name.clone()}</div>
                            <div style="font-size: 12px; color: var(--colorNeutralForeground3, #777);">
                                {format!("{} • {}", p.category, p.style)}
                            </div>
                            <div style="margin-top: 4px;">{p.price_display()}</div>
                        </div>
                    </For>
                </div>
            </Show>
        </Show>
    }
}
