use axum::Json;

use crate::shared::config::CONFIG;
use crate::usecases::u101_recommendation;
use contracts::usecases::u101_recommendation::dto::{RecommendRequest, RecommendResponse};

/// POST /api/u101/recommend
///
/// Всегда 200: ошибки внешнего сервиса приходят в теле как success=false
pub async fn recommend(Json(request): Json<RecommendRequest>) -> Json<RecommendResponse> {
    Json(u101_recommendation::service::recommend(&CONFIG.llm, request).await)
}
