use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// База generative-language API (без завершающего слэша)
    pub endpoint: String,
    pub default_model: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[llm]
endpoint = "https://generativelanguage.googleapis.com/v1beta"
default_model = "gemini-1.5-flash"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Глобальная конфигурация приложения
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {}", e);
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid")
    })
});

/// Ключ по умолчанию из окружения сервера
pub fn env_api_key() -> Option<String> {
    std::env::var("GOOGLE_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

/// Выбор ключа: поле из UI имеет приоритет над GOOGLE_API_KEY сервера
pub fn resolve_api_key(request_key: Option<&str>) -> Option<String> {
    request_key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .or_else(env_api_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.default_model, "gemini-1.5-flash");
        assert!(config.llm.endpoint.starts_with("https://"));
    }

    #[test]
    fn test_resolve_api_key_prefers_request_key() {
        assert_eq!(resolve_api_key(Some("  abc  ")), Some("abc".to_string()));
    }
}
