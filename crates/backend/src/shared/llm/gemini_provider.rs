use super::types::{ChatPrompt, LlmError, LlmProvider, LlmResponse};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// HTTP-клиент для Google generative-language API (Gemini)
///
/// Ключ передаётся query-параметром `key`, модель входит в путь:
/// POST {endpoint}/models/{model}:generateContent?key=...
pub struct GeminiProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

// ============================================================================
// Wire types (generateContent)
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
    #[serde(rename = "modelVersion")]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "totalTokenCount")]
    total_token_count: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl GeminiProvider {
    pub fn new(endpoint: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to create HTTP client"),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    /// Конвертировать промпт в формат Gemini
    ///
    /// Системная инструкция уходит в systemInstruction, текст пользователя
    /// становится единственным элементом contents с ролью "user".
    fn convert_prompt(prompt: ChatPrompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: prompt.user }],
            }],
            system_instruction: prompt.system.map(|text| Content {
                role: None,
                parts: vec![Part { text }],
            }),
        }
    }

    /// Сообщение об ошибке из тела ответа Google, иначе сырой текст
    fn extract_error_message(body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => match envelope.error {
                Some(e) if !e.message.is_empty() => {
                    if e.status.is_empty() {
                        e.message
                    } else {
                        format!("{} ({})", e.message, e.status)
                    }
                }
                _ => body.chars().take(500).collect(),
            },
            Err(_) => body.chars().take(500).collect(),
        }
    }

    fn map_error(status: reqwest::StatusCode, body: &str) -> LlmError {
        let message = Self::extract_error_message(body);
        match status.as_u16() {
            401 | 403 => LlmError::AuthError(message),
            400 if message.contains("API key") => LlmError::AuthError(message),
            400 => LlmError::InvalidRequest(message),
            429 => LlmError::RateLimitExceeded,
            _ => LlmError::ApiError(format!("HTTP {}: {}", status.as_u16(), message)),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(&self, prompt: ChatPrompt) -> Result<LlmResponse, LlmError> {
        if prompt.user.trim().is_empty() {
            return Err(LlmError::InvalidRequest(
                "Prompt text must not be empty".to_string(),
            ));
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let request = Self::convert_prompt(prompt);

        tracing::debug!("Gemini request: POST {}/models/{}:generateContent", self.endpoint, self.model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            tracing::error!("Gemini API request failed: {} {}", status, body);
            return Err(Self::map_error(status, &body));
        }

        let data: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(500).collect();
            tracing::error!("Failed to parse Gemini response: {}. Body: {}", e, preview);
            LlmError::ApiError(format!("Failed to parse Gemini response: {}", e))
        })?;

        let candidate = data
            .candidates
            .first()
            .ok_or_else(|| LlmError::ApiError("No candidates in Gemini response".to_string()))?;

        let content = candidate
            .content
            .as_ref()
            .map(|c| {
                c.parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(LlmResponse {
            content,
            tokens_used: data.usage_metadata.and_then(|u| u.total_token_count),
            model: data.model_version.unwrap_or_else(|| self.model.clone()),
            finish_reason: candidate.finish_reason.clone(),
        })
    }

    async fn test_connection(&self) -> Result<(), LlmError> {
        self.generate(ChatPrompt::new("Hello")).await?;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "Gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_content_response() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "- Running Sneakers: "}, {"text": "great for daily use"}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 40, "totalTokenCount": 160},
            "modelVersion": "gemini-1.5-flash-002"
        }"#;

        let data: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(data.candidates.len(), 1);
        let text: String = data.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "- Running Sneakers: great for daily use");
        assert_eq!(
            data.usage_metadata.unwrap().total_token_count,
            Some(160)
        );
    }

    #[test]
    fn test_error_mapping() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#;
        let err = GeminiProvider::map_error(reqwest::StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, LlmError::AuthError(_)));

        let err = GeminiProvider::map_error(reqwest::StatusCode::TOO_MANY_REQUESTS, "{}");
        assert!(matches!(err, LlmError::RateLimitExceeded));

        let err = GeminiProvider::map_error(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "oops");
        assert!(matches!(err, LlmError::ApiError(_)));
    }

    #[test]
    fn test_convert_prompt_shape() {
        let request = GeminiProvider::convert_prompt(ChatPrompt::with_system(
            "You are a shopping assistant.",
            "casual shoes under $40",
        ));
        assert!(request.system_instruction.is_some());
        assert!(request.system_instruction.as_ref().unwrap().role.is_none());
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
        assert_eq!(request.contents[0].parts[0].text, "casual shoes under $40");

        let request = GeminiProvider::convert_prompt(ChatPrompt::new("hi"));
        assert!(request.system_instruction.is_none());
    }
}
