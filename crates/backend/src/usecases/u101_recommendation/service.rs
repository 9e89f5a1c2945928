use crate::domain::a001_product;
use crate::shared::config::{self, LlmConfig};
use crate::shared::llm::gemini_provider::GeminiProvider;
use crate::shared::llm::prompt::build_recommendation_prompt;
use crate::shared::llm::types::{ChatPrompt, LlmProvider};
use contracts::usecases::u101_recommendation::dto::{RecommendRequest, RecommendResponse};

/// Выполнить рекомендацию: фильтр каталога + один вызов Gemini
///
/// Любая ошибка внешнего сервиса возвращается как success=false
/// с текстом; без повторов и восстановления.
pub async fn recommend(llm_config: &LlmConfig, request: RecommendRequest) -> RecommendResponse {
    let model = request.model.as_str().to_string();

    let Some(api_key) = config::resolve_api_key(request.api_key.as_deref()) else {
        return RecommendResponse::error(
            "Please provide your Gemini API key in the sidebar for AI recommendations.",
            model,
        );
    };

    let filtered = a001_product::service::filter_products(request.budget, &request.categories);
    if filtered.is_empty() {
        return RecommendResponse::error(
            "No products matched your filters; nothing to recommend.",
            model,
        );
    }

    let prompt = build_recommendation_prompt(&filtered, request.need.trim());
    let provider = GeminiProvider::new(llm_config.endpoint.clone(), api_key, model.clone());

    let chat = ChatPrompt::with_system("You are a helpful shopping assistant.", prompt);

    match provider.generate(chat).await {
        Ok(response) => {
            tracing::info!(
                "Recommendation generated: model={}, tokens={:?}",
                response.model,
                response.tokens_used
            );
            RecommendResponse::ok(response.content, response.model, response.tokens_used)
        }
        Err(e) => {
            tracing::error!("Error generating recommendations: {}", e);
            RecommendResponse::error(format!("Error generating recommendations: {}", e), model)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u101_recommendation::dto::GeminiModel;

    fn test_config() -> LlmConfig {
        LlmConfig {
            // Unroutable endpoint: tests must not reach the real API
            endpoint: "http://127.0.0.1:1".to_string(),
            default_model: "gemini-1.5-flash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_key_yields_warning_response() {
        // Blank request key and no env fallback expected in the test environment
        if config::env_api_key().is_some() {
            return;
        }
        let request = RecommendRequest {
            budget: 50.0,
            categories: vec![],
            need: "casual shoes".to_string(),
            model: GeminiModel::Flash15,
            api_key: Some("   ".to_string()),
        };
        let response = recommend(&test_config(), request).await;
        assert!(!response.success);
        assert!(response.message.unwrap().contains("Gemini API key"));
    }

    #[tokio::test]
    async fn test_empty_filter_result_short_circuits() {
        let request = RecommendRequest {
            budget: 0.5,
            categories: vec![],
            need: String::new(),
            model: GeminiModel::Flash15,
            api_key: Some("test-key".to_string()),
        };
        let response = recommend(&test_config(), request).await;
        assert!(!response.success);
        assert!(response.message.unwrap().contains("No products matched"));
    }

    #[tokio::test]
    async fn test_provider_failure_is_stringified() {
        let request = RecommendRequest {
            budget: 50.0,
            categories: vec![],
            need: "anything".to_string(),
            model: GeminiModel::Pro15,
            api_key: Some("test-key".to_string()),
        };
        let response = recommend(&test_config(), request).await;
        assert!(!response.success);
        assert_eq!(response.model, "gemini-1.5-pro");
        assert!(response
            .message
            .unwrap()
            .contains("Error generating recommendations"));
    }
}
