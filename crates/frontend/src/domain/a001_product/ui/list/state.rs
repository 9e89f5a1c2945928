use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductFilterState {
    // Фильтры
    pub budget: f64,
    pub selected_categories: Vec<String>,

    // Свободный текст: что ищет пользователь
    pub need: String,

    // Флаг: поиск уже выполнялся (для пустого результата)
    pub is_loaded: bool,
}

impl Default for ProductFilterState {
    fn default() -> Self {
        Self {
            budget: 50.0,
            selected_categories: Vec::new(),
            need: String::new(),
            is_loaded: false,
        }
    }
}

impl ProductFilterState {
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.selected_categories.iter().position(|c| c == category) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(category.to_string());
        }
    }
}

pub fn create_state() -> RwSignal<ProductFilterState> {
    RwSignal::new(ProductFilterState::default())
}
