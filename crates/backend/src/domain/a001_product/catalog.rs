use contracts::domain::a001_product::aggregate::{Category, Product};
use once_cell::sync::Lazy;

/// Демо-каталог из 12 товаров
///
/// Статические данные; для production заменить на Shopify или живой API.
pub static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        // Clothing
        Product::new(
            "Blue T-Shirt",
            Category::Clothing,
            20.0,
            "Casual",
            "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?auto=format&w=800&q=80",
        ),
        Product::new(
            "Slim-Fit Chinos",
            Category::Clothing,
            32.0,
            "Smart Casual",
            "https://images.unsplash.com/photo-1520974735194-6a4f4bafab63?auto=format&w=800&q=80",
        ),
        Product::new(
            "Denim Jacket",
            Category::Clothing,
            45.0,
            "Casual",
            "https://images.unsplash.com/photo-1503342452485-86ff0a8bccc5?auto=format&w=800&q=80",
        ),
        Product::new(
            "Athletic Hoodie",
            Category::Clothing,
            28.0,
            "Athleisure",
            "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&w=800&q=80",
        ),
        // Footwear
        Product::new(
            "Running Sneakers",
            Category::Footwear,
            35.0,
            "Athleisure",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?auto=format&w=800&q=80",
        ),
        Product::new(
            "Formal Black Shoes",
            Category::Footwear,
            50.0,
            "Formal",
            "https://images.unsplash.com/photo-1520256862855-398228c41684?auto=format&w=800&q=80",
        ),
        Product::new(
            "Slip-on Canvas",
            Category::Footwear,
            22.0,
            "Casual",
            "https://images.unsplash.com/photo-1519741497674-611481863552?auto=format&w=800&q=80",
        ),
        // Electronics
        Product::new(
            "Wireless Headphones",
            Category::Electronics,
            80.0,
            "Modern",
            "https://images.unsplash.com/photo-1518443870897-85f15fd4d5d0?auto=format&w=800&q=80",
        ),
        Product::new(
            "Smartwatch",
            Category::Electronics,
            60.0,
            "Minimal",
            "https://images.unsplash.com/photo-1518441902119-8897f33d0e3e?auto=format&w=800&q=80",
        ),
        // Accessories
        Product::new(
            "Leather Belt",
            Category::Accessories,
            18.0,
            "Classic",
            "https://images.unsplash.com/photo-1601121141461-9d5b2e3e7893?auto=format&w=800&q=80",
        ),
        Product::new(
            "Wayfarer Sunglasses",
            Category::Accessories,
            25.0,
            "Casual",
            "https://images.unsplash.com/photo-1511499767150-a48a237f0083?auto=format&w=800&q=80",
        ),
        // Home & Kitchen
        Product::new(
            "Insulated Water Bottle",
            Category::HomeKitchen,
            15.0,
            "Everyday",
            "https://images.unsplash.com/photo-1607346256330-dee7af15f7d0?auto=format&w=800&q=80",
        ),
    ]
});
