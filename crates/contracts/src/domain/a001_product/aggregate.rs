use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// Категория товара демо-каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Clothing,
    Footwear,
    Electronics,
    Accessories,
    #[serde(rename = "Home & Kitchen")]
    HomeKitchen,
}

impl Category {
    /// Все категории в порядке отображения (отсортированы по названию)
    pub const ALL: [Category; 5] = [
        Category::Accessories,
        Category::Clothing,
        Category::Electronics,
        Category::Footwear,
        Category::HomeKitchen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Footwear => "Footwear",
            Category::Electronics => "Electronics",
            Category::Accessories => "Accessories",
            Category::HomeKitchen => "Home & Kitchen",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Clothing" => Ok(Category::Clothing),
            "Footwear" => Ok(Category::Footwear),
            "Electronics" => Ok(Category::Electronics),
            "Accessories" => Ok(Category::Accessories),
            "Home & Kitchen" => Ok(Category::HomeKitchen),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Product
// ============================================================================

/// Товар демо-каталога
///
/// Статические конфигурационные данные: без идентификатора и жизненного
/// цикла, каталог целиком задан в коде backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub style: String,
    /// URL изображения товара
    pub image: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        price: f64,
        style: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            price,
            style: style.into(),
            image: image.into(),
        }
    }

    /// Цена для отображения: целые доллары без дробной части
    pub fn price_display(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("${}", self.price as i64)
        } else {
            format!("${:.2}", self.price)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_display_string() {
        let json = serde_json::to_string(&Category::HomeKitchen).unwrap();
        assert_eq!(json, "\"Home & Kitchen\"");

        let back: Category = serde_json::from_str("\"Home & Kitchen\"").unwrap();
        assert_eq!(back, Category::HomeKitchen);
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        assert!("Furniture".parse::<Category>().is_err());
        assert_eq!("Footwear".parse::<Category>(), Ok(Category::Footwear));
    }

    #[test]
    fn test_price_display_whole_dollars() {
        let p = Product::new("Blue T-Shirt", Category::Clothing, 20.0, "Casual", "");
        assert_eq!(p.price_display(), "$20");

        let p = Product::new("Sale Item", Category::Clothing, 19.5, "Casual", "");
        assert_eq!(p.price_display(), "$19.50");
    }
}
