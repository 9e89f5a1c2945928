use contracts::domain::a001_product::aggregate::Category;
use contracts::usecases::u101_recommendation::dto::{
    GeminiModel, RecommendRequest, RecommendResponse,
};
use gloo_net::http::Request;

const API_BASE: &str = "/api/u101";

/// Запросить AI-рекомендацию по текущим фильтрам
///
/// Пустой ключ не отправляем: backend подставит GOOGLE_API_KEY
pub async fn recommend(
    budget: f64,
    categories: &[String],
    need: &str,
    model: &str,
    api_key: &str,
) -> Result<RecommendResponse, String> {
    let url = format!("{}/recommend", API_BASE);

    let request = RecommendRequest {
        budget,
        categories: categories
            .iter()
            .filter_map(|c| c.parse::<Category>().ok())
            .collect(),
        need: need.to_string(),
        model: model.parse::<GeminiModel>().unwrap_or_default(),
        api_key: {
            let trimmed = api_key.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        },
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

    let data: RecommendResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
