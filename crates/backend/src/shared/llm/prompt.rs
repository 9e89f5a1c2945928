use contracts::domain::a001_product::aggregate::Product;

/// Промпт рекомендации: отфильтрованный список товаров как JSON
/// плюс свободный текст пользователя
pub fn build_recommendation_prompt(products: &[Product], need: &str) -> String {
    let products_json =
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string());

    format!(
        "You are a shopping assistant. From this product list, pick the best matches:\n\
        {products_json}\n\
        \n\
        User need: {need}\n\
        \n\
        Return a short, bulleted recommendation list. For each pick, include:\n\
        - Why it matches the user's need\n\
        - Price and category\n\
        - Any style notes\n\
        Keep it under 120 words."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::Category;

    #[test]
    fn test_prompt_embeds_products_and_need() {
        let products = vec![Product::new(
            "Running Sneakers",
            Category::Footwear,
            35.0,
            "Athleisure",
            "https://example.com/sneakers.jpg",
        )];

        let prompt = build_recommendation_prompt(&products, "casual shoes under $40");
        assert!(prompt.contains("Running Sneakers"));
        assert!(prompt.contains("\"category\": \"Footwear\""));
        assert!(prompt.contains("User need: casual shoes under $40"));
        assert!(prompt.contains("under 120 words"));
    }

    #[test]
    fn test_prompt_with_empty_need() {
        let prompt = build_recommendation_prompt(&[], "");
        assert!(prompt.contains("User need: \n"));
        assert!(prompt.contains("[]"));
    }
}
