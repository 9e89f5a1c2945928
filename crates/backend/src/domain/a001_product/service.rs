use super::catalog::CATALOG;
use contracts::domain::a001_product::aggregate::{Category, Product};

/// Получить весь каталог
pub fn list_all() -> Vec<Product> {
    CATALOG.clone()
}

/// Отсортированный список категорий, встречающихся в каталоге
pub fn list_categories() -> Vec<Category> {
    let mut categories: Vec<Category> = Category::ALL
        .iter()
        .copied()
        .filter(|c| CATALOG.iter().any(|p| p.category == *c))
        .collect();
    categories.sort_by_key(|c| c.as_str());
    categories
}

/// Фильтр каталога: товар проходит тогда и только тогда, когда
/// price <= budget и (список категорий пуст или категория товара в нём)
pub fn filter_products(budget: f64, categories: &[Category]) -> Vec<Product> {
    CATALOG
        .iter()
        .filter(|p| matches_filter(p, budget, categories))
        .cloned()
        .collect()
}

fn matches_filter(product: &Product, budget: f64, categories: &[Category]) -> bool {
    product.price <= budget && (categories.is_empty() || categories.contains(&product.category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_twelve_products() {
        assert_eq!(list_all().len(), 12);
    }

    #[test]
    fn test_filter_predicate_holds_for_every_record() {
        // Свойство из спеки фильтра: товар в результате <=> предикат истинен
        let budgets = [0.0, 15.0, 20.0, 35.0, 50.0, 80.0, 1000.0];
        let category_sets: Vec<Vec<Category>> = vec![
            vec![],
            vec![Category::Clothing],
            vec![Category::Footwear, Category::Electronics],
            Category::ALL.to_vec(),
        ];

        for budget in budgets {
            for categories in &category_sets {
                let result = filter_products(budget, categories);
                for p in CATALOG.iter() {
                    let expected = p.price <= budget
                        && (categories.is_empty() || categories.contains(&p.category));
                    assert_eq!(
                        result.contains(p),
                        expected,
                        "product {:?}, budget {}, categories {:?}",
                        p.name,
                        budget,
                        categories
                    );
                }
            }
        }
    }

    #[test]
    fn test_budget_boundary_is_inclusive() {
        let result = filter_products(20.0, &[]);
        assert!(result.iter().any(|p| p.name == "Blue T-Shirt"));
        assert!(!result.iter().any(|p| p.name == "Slip-on Canvas")); // $22
    }

    #[test]
    fn test_empty_categories_means_no_category_filter() {
        let all = filter_products(1000.0, &[]);
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn test_category_filter_restricts_result() {
        let result = filter_products(1000.0, &[Category::Footwear]);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|p| p.category == Category::Footwear));
    }

    #[test]
    fn test_empty_result_is_valid() {
        let result = filter_products(1.0, &[Category::Electronics]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_list_categories_sorted() {
        let categories = list_categories();
        assert_eq!(categories.len(), 5);
        let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
