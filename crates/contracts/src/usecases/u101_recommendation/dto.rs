use crate::domain::a001_product::aggregate::{Category, Product};
use serde::{Deserialize, Serialize};

// ============================================================================
// Models
// ============================================================================

/// Доступные модели Gemini (две фиксированные опции)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeminiModel {
    #[serde(rename = "gemini-1.5-flash")]
    Flash15,
    #[serde(rename = "gemini-1.5-pro")]
    Pro15,
}

impl GeminiModel {
    pub const ALL: [GeminiModel; 2] = [GeminiModel::Flash15, GeminiModel::Pro15];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeminiModel::Flash15 => "gemini-1.5-flash",
            GeminiModel::Pro15 => "gemini-1.5-pro",
        }
    }
}

impl std::str::FromStr for GeminiModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini-1.5-flash" => Ok(GeminiModel::Flash15),
            "gemini-1.5-pro" => Ok(GeminiModel::Pro15),
            other => Err(format!("Unknown model: {}", other)),
        }
    }
}

impl Default for GeminiModel {
    fn default() -> Self {
        GeminiModel::Flash15
    }
}

impl std::fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Catalog filter
// ============================================================================

/// Запрос фильтрации каталога по бюджету и категориям
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFilterRequest {
    pub budget: f64,
    /// Пустой список = без фильтра по категориям
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFilterResponse {
    pub items: Vec<Product>,
    pub total: usize,
}

// ============================================================================
// Recommendation
// ============================================================================

/// Запрос AI-рекомендации: те же фильтры плюс свободный текст пользователя
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub budget: f64,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Свободный текст: что ищет пользователь
    #[serde(default)]
    pub need: String,
    #[serde(default)]
    pub model: GeminiModel,
    /// Ключ из поля настроек UI; при отсутствии backend берёт GOOGLE_API_KEY
    #[serde(rename = "apiKey", default)]
    pub api_key: Option<String>,
}

/// Ответ рекомендации. Ошибки внешнего сервиса приходят как
/// `success: false` + message, без отдельного HTTP-статуса.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    /// Текст рекомендации (markdown) при success = true
    #[serde(default)]
    pub recommendation: Option<String>,
    /// Сообщение об ошибке при success = false
    #[serde(default)]
    pub message: Option<String>,
    pub model: String,
    #[serde(rename = "tokensUsed", default)]
    pub tokens_used: Option<i32>,
}

impl RecommendResponse {
    pub fn ok(recommendation: String, model: String, tokens_used: Option<i32>) -> Self {
        Self {
            success: true,
            recommendation: Some(recommendation),
            message: None,
            model,
            tokens_used,
        }
    }

    pub fn error(message: impl Into<String>, model: String) -> Self {
        Self {
            success: false,
            recommendation: None,
            message: Some(message.into()),
            model,
            tokens_used: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_serializes_as_api_name() {
        assert_eq!(
            serde_json::to_string(&GeminiModel::Flash15).unwrap(),
            "\"gemini-1.5-flash\""
        );
        assert_eq!(GeminiModel::default().as_str(), "gemini-1.5-flash");
    }

    #[test]
    fn test_filter_request_categories_default_empty() {
        let req: CatalogFilterRequest = serde_json::from_str(r#"{"budget": 50}"#).unwrap();
        assert_eq!(req.budget, 50.0);
        assert!(req.categories.is_empty());
    }

    #[test]
    fn test_recommend_request_wire_shape() {
        let req: RecommendRequest = serde_json::from_str(
            r#"{"budget": 40, "categories": ["Footwear"], "need": "casual shoes", "model": "gemini-1.5-pro", "apiKey": "k"}"#,
        )
        .unwrap();
        assert_eq!(req.model, GeminiModel::Pro15);
        assert_eq!(req.api_key.as_deref(), Some("k"));
        assert_eq!(req.categories.len(), 1);
    }
}
