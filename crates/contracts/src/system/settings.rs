use crate::usecases::u101_recommendation::dto::GeminiModel;
use serde::{Deserialize, Serialize};

/// Настройки приложения для UI
///
/// Сервер сообщает только факт наличия ключа в окружении,
/// само значение GOOGLE_API_KEY никогда не покидает backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(rename = "hasEnvKey")]
    pub has_env_key: bool,
    #[serde(rename = "defaultModel")]
    pub default_model: String,
    pub models: Vec<String>,
}

/// Запрос проверки подключения к LLM провайдеру
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTestRequest {
    /// Ключ из поля UI; пустой или отсутствующий = ключ сервера
    #[serde(rename = "apiKey", default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: GeminiModel,
}

/// Результат проверки подключения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTestResult {
    pub success: bool,
    pub message: String,
    pub provider: String,
    pub model: String,
}
