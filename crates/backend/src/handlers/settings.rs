use axum::Json;

use crate::shared::config::{self, LlmConfig, CONFIG};
use crate::shared::llm::gemini_provider::GeminiProvider;
use crate::shared::llm::types::LlmProvider;
use contracts::system::settings::{AppSettings, ConnectionTestRequest, ConnectionTestResult};
use contracts::usecases::u101_recommendation::dto::GeminiModel;

/// GET /api/system/settings
///
/// Сообщает UI наличие GOOGLE_API_KEY (только факт, не значение),
/// модель по умолчанию и список моделей.
pub async fn get_settings() -> Json<AppSettings> {
    Json(AppSettings {
        has_env_key: config::env_api_key().is_some(),
        default_model: CONFIG.llm.default_model.clone(),
        models: GeminiModel::ALL
            .iter()
            .map(|m| m.as_str().to_string())
            .collect(),
    })
}

/// POST /api/system/test-connection
///
/// Всегда 200: результат проверки приходит в теле как success=true/false
pub async fn test_connection(
    Json(request): Json<ConnectionTestRequest>,
) -> Json<ConnectionTestResult> {
    Json(run_connection_test(&CONFIG.llm, request).await)
}

/// Проверка подключения: один короткий вызов generateContent
async fn run_connection_test(
    llm_config: &LlmConfig,
    request: ConnectionTestRequest,
) -> ConnectionTestResult {
    let model = request.model.as_str().to_string();

    let Some(api_key) = config::resolve_api_key(request.api_key.as_deref()) else {
        return ConnectionTestResult {
            success: false,
            message: "No API key: enter one in the sidebar or set GOOGLE_API_KEY.".to_string(),
            provider: "Gemini".to_string(),
            model,
        };
    };

    let provider = GeminiProvider::new(llm_config.endpoint.clone(), api_key, model.clone());

    match provider.test_connection().await {
        Ok(()) => ConnectionTestResult {
            success: true,
            message: format!("Successfully connected to {}", provider.provider_name()),
            provider: provider.provider_name().to_string(),
            model,
        },
        Err(e) => {
            tracing::error!("Connection test failed: {}", e);
            ConnectionTestResult {
                success: false,
                message: format!("Connection failed: {}", e),
                provider: provider.provider_name().to_string(),
                model,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> LlmConfig {
        LlmConfig {
            // Unroutable endpoint: tests must not reach the real API
            endpoint: "http://127.0.0.1:1".to_string(),
            default_model: "gemini-1.5-flash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_connection_without_key_fails_with_hint() {
        // Blank request key and no env fallback expected in the test environment
        if config::env_api_key().is_some() {
            return;
        }
        let request = ConnectionTestRequest {
            api_key: None,
            model: GeminiModel::Flash15,
        };
        let result = run_connection_test(&test_config(), request).await;
        assert!(!result.success);
        assert!(result.message.contains("No API key"));
        assert_eq!(result.provider, "Gemini");
    }

    #[tokio::test]
    async fn test_connection_failure_reports_provider_and_model() {
        let request = ConnectionTestRequest {
            api_key: Some("test-key".to_string()),
            model: GeminiModel::Pro15,
        };
        let result = run_connection_test(&test_config(), request).await;
        assert!(!result.success);
        assert!(result.message.contains("Connection failed"));
        assert_eq!(result.provider, "Gemini");
        assert_eq!(result.model, "gemini-1.5-pro");
    }
}
