use contracts::system::settings::{AppSettings, ConnectionTestRequest, ConnectionTestResult};
use contracts::usecases::u101_recommendation::dto::GeminiModel;
use gloo_net::http::Request;

const API_BASE: &str = "/api/system";

/// Получить настройки приложения (наличие ключа в окружении, модели)
pub async fn fetch_settings() -> Result<AppSettings, String> {
    let url = format!("{}/settings", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: AppSettings = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Проверить подключение к Gemini с текущим ключом и моделью
///
/// Пустой ключ не отправляем: backend подставит GOOGLE_API_KEY
pub async fn test_connection(model: &str, api_key: &str) -> Result<ConnectionTestResult, String> {
    let url = format!("{}/test-connection", API_BASE);

    let request = ConnectionTestRequest {
        api_key: {
            let trimmed = api_key.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        },
        model: model.parse::<GeminiModel>().unwrap_or_default(),
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

    let data: ConnectionTestResult = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
