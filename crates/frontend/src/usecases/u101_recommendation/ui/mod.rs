use super::api::recommend;
use crate::domain::a001_product::api as catalog_api;
use crate::domain::a001_product::ui::list::state::create_state;
use crate::domain::a001_product::ui::list::ProductCards;
use crate::system::settings::context::use_settings;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use thaw::*;

/// Основная страница: фильтры, карточки результатов, AI-рекомендация
#[component]
#[allow(non_snake_case)]
pub fn AssistantPage() -> impl IntoView {
    let settings = use_settings();
    let state = create_state();

    let category_options = RwSignal::new(Vec::<String>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    let is_finding = RwSignal::new(false);
    let recommendation = RwSignal::new(None::<String>);
    let warning = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    // Загрузить список категорий один раз при монтировании
    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match catalog_api::fetch_categories().await {
                Ok(categories) => category_options.set(categories),
                Err(e) => log::warn!("Failed to load categories: {}", e),
            }
        });
    });

    let on_find = move |_| {
        if is_finding.get() {
            return;
        }
        is_finding.set(true);
        recommendation.set(None);
        warning.set(None);
        error.set(None);

        let filter = state.get();
        let key_available = settings.key_available();
        let api_key = settings.api_key.get();
        let model = settings.model.get();

        wasm_bindgen_futures::spawn_local(async move {
            // 1) Фильтр по бюджету и категориям
            match catalog_api::filter_products(filter.budget, &filter.selected_categories).await {
                Ok(items) => {
                    products.set(items);
                    state.update(|s| s.is_loaded = true);
                }
                Err(e) => {
                    error.set(Some(e));
                    is_finding.set(false);
                    return;
                }
            }

            // 2) AI-рекомендация, только если есть ключ
            if !key_available {
                warning.set(Some(
                    "Please provide your Gemini API key in the sidebar for AI recommendations."
                        .to_string(),
                ));
                is_finding.set(false);
                return;
            }

            match recommend(
                filter.budget,
                &filter.selected_categories,
                &filter.need,
                &model,
                &api_key,
            )
            .await
            {
                Ok(response) if response.success => {
                    recommendation.set(response.recommendation);
                }
                Ok(response) => {
                    error.set(Some(response.message.unwrap_or_else(|| {
                        "Error generating recommendations".to_string()
                    })));
                }
                Err(e) => error.set(Some(e)),
            }
            is_finding.set(false);
        });
    };

    view! {
        <h1 style="margin-bottom: 4px;">"🛍 AI Virtual Shopping Assistant"</h1>
        <div style="margin-bottom: 20px; color: var(--colorNeutralForeground3, #777);">
            "Describe what you want — budget, style, category — and get smart picks."
        </div>

        // Фильтры: бюджет слева, категории справа
        <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 12px;">
            <div>
                <label
                    for="budget"
                    style="display: block; margin-bottom: 4px; font-size: 13px; font-weight: 600;"
                >
                    "Max Budget ($)"
                </label>
                <input
                    id="budget"
                    type="number"
                    min="1"
                    style="width: 100%; padding: 6px 8px; border: 1px solid var(--colorNeutralStroke1, #ccc); border-radius: 4px; box-sizing: border-box;"
                    prop:value=move || state.get().budget.to_string()
                    on:input=move |ev| {
                        if let Ok(budget) = event_target_value(&ev).parse::<f64>() {
                            state.update(|s| s.budget = budget.max(1.0));
                        }
                    }
                />
            </div>
            <div>
                <label style="display: block; margin-bottom: 4px; font-size: 13px; font-weight: 600;">
                    "Categories"
                </label>
                <div style="display: flex; flex-wrap: wrap; gap: 8px 16px;">
                    <For
                        each=move || category_options.get()
                        key=|c| c.clone()
                        let:c
                    >
                        {
                            let name = c.clone();
                            let name_checked = c.clone();
                            let name_toggle = c;
                            view! {
                                <label style="display: flex; align-items: center; gap: 6px; font-size: 13px;">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            state.get().selected_categories.contains(&name_checked)
                                        }
                                        on:change=move |_| {
                                            state.update(|s| s.toggle_category(&name_toggle))
                                        }
                                    />
                                    {name}
                                </label>
                            }
                        }
                    </For>
                </div>
            </div>
        </div>

        <div style="margin-bottom: 16px;">
            <label
                for="need"
                style="display: block; margin-bottom: 4px; font-size: 13px; font-weight: 600;"
            >
                "Tell me what you're looking for"
            </label>
            <input
                id="need"
                type="text"
                style="width: 100%; padding: 6px 8px; border: 1px solid var(--colorNeutralStroke1, #ccc); border-radius: 4px; box-sizing: border-box;"
                prop:value=move || state.get().need
                on:input=move |ev| state.update(|s| s.need = event_target_value(&ev))
                placeholder="e.g., casual shoes under $40 for daily use"
            />
        </div>

        <Button appearance=ButtonAppearance::Primary on_click=on_find>
            {move || if is_finding.get() { "Searching..." } else { "Find Products" }}
        </Button>

        // Warning: нет ключа
        {move || {
            warning
                .get()
                .map(|w| {
                    view! {
                        <div style="padding: 12px; margin-top: 16px; background: var(--colorStatusWarningBackground1, #fff4ce); border-radius: 8px;">
                            {w}
                        </div>
                    }
                })
        }}

        // Error display
        {move || {
            error
                .get()
                .map(|e| {
                    view! {
                        <div style="padding: 12px; margin-top: 16px; background: var(--colorStatusDangerBackground1, #fde7e9); border-radius: 8px;">
                            <span style="color: var(--colorStatusDangerForeground1, #b10e1c);">{e}</span>
                        </div>
                    }
                })
        }}

        <ProductCards
            products=products
            is_loaded=Signal::derive(move || state.get().is_loaded)
        />

        // AI-рекомендация
        {move || {
            recommendation
                .get()
                .map(|text| {
                    view! {
                        <div style="margin-top: 20px;">
                            <h3>"🎯 AI Recommendations"</h3>
                            <div style="white-space: pre-wrap; padding: 12px; background: var(--colorNeutralBackground1, #fff); border: 1px solid var(--colorNeutralStroke2, #e0e0e0); border-radius: 8px;">
                                {text}
                            </div>
                        </div>
                    }
                })
        }}

        <hr style="margin-top: 24px; border: none; border-top: 1px solid var(--colorNeutralStroke2, #e0e0e0);" />
        <div style="margin-top: 8px; font-size: 12px; color: var(--colorNeutralForeground3, #777);">
            "Demo catalog used. Replace with Shopify or a live API for production."
        </div>
    }
}
