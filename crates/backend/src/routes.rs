use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM ROUTES
        // ========================================
        .route("/api/system/settings", get(handlers::settings::get_settings))
        .route(
            "/api/system/test-connection",
            post(handlers::settings::test_connection),
        )
        // ========================================
        // CATALOG ROUTES
        // ========================================
        .route("/api/catalog", get(handlers::a001_product::list_all))
        .route(
            "/api/catalog/categories",
            get(handlers::a001_product::list_categories),
        )
        .route("/api/catalog/filter", post(handlers::a001_product::filter))
        // UseCase u101: AI recommendation
        .route(
            "/api/u101/recommend",
            post(handlers::u101_recommendation::recommend),
        )
        // Frontend SPA (built into dist/)
        .fallback_service(ServeDir::new("dist"))
}
