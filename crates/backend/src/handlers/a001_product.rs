use axum::Json;

use crate::domain::a001_product;
use contracts::domain::a001_product::aggregate::{Category, Product};
use contracts::usecases::u101_recommendation::dto::{CatalogFilterRequest, CatalogFilterResponse};

/// GET /api/catalog
pub async fn list_all() -> Json<Vec<Product>> {
    Json(a001_product::service::list_all())
}

/// GET /api/catalog/categories
pub async fn list_categories() -> Json<Vec<Category>> {
    Json(a001_product::service::list_categories())
}

/// POST /api/catalog/filter
pub async fn filter(Json(request): Json<CatalogFilterRequest>) -> Json<CatalogFilterResponse> {
    let items = a001_product::service::filter_products(request.budget, &request.categories);
    let total = items.len();
    Json(CatalogFilterResponse { items, total })
}
