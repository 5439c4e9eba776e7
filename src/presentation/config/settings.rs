use serde::Deserialize;

use crate::infrastructure::llm::DEFAULT_BASE_URL;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
    pub public_base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageProviderSetting {
    Relational,
    ObjectStorage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Build settings from environment variables with local-development
    /// defaults for everything except the API key.
    pub fn from_env() -> Self {
        let environment: Environment = std::env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse()
            .unwrap_or(Environment::Local);

        Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            gemini: GeminiSettings {
                api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
                model: std::env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),
                base_url: std::env::var("GEMINI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            },
            database: DatabaseSettings {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost:5432/filesense".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
            storage: StorageSettings {
                provider: match std::env::var("STORAGE_PROVIDER").as_deref() {
                    Ok("object_storage") => StorageProviderSetting::ObjectStorage,
                    _ => StorageProviderSetting::Relational,
                },
                local_path: std::env::var("STORAGE_LOCAL_PATH")
                    .unwrap_or_else(|_| "./data/files".to_string()),
                public_base_url: std::env::var("STORAGE_PUBLIC_BASE_URL").ok(),
            },
            logging: LoggingSettings {
                level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                enable_json: environment.is_prod()
                    || std::env::var("LOG_FORMAT")
                        .map(|v| v.to_lowercase() == "json")
                        .unwrap_or(false),
            },
        }
    }
}
