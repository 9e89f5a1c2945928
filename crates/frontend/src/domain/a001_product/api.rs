use contracts::domain::a001_product::aggregate::{Category, Product};
use contracts::usecases::u101_recommendation::dto::{CatalogFilterRequest, CatalogFilterResponse};
use gloo_net::http::Request;

const API_BASE: &str = "/api/catalog";

/// Получить список категорий каталога (отсортированные строки)
pub async fn fetch_categories() -> Result<Vec<String>, String> {
    let url = format!("{}/categories", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<String> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Отфильтровать каталог по бюджету и категориям
pub async fn filter_products(budget: f64, categories: &[String]) -> Result<Vec<Product>, String> {
    let url = format!("{}/filter", API_BASE);

    let request = CatalogFilterRequest {
        budget,
        categories: categories
            .iter()
            .filter_map(|c| c.parse::<Category>().ok())
            .collect(),
    };

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: CatalogFilterResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.items)
}
