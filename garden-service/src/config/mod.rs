use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct GardenConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub database: DatabaseConfig,
    pub swagger_enabled: bool,
}

/// Document store settings. The service runs without a store when either value is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    /// Connection string and database name, when both are configured.
    pub fn connection(&self) -> Option<(&str, &str)> {
        match (self.url.as_deref(), self.name.as_deref()) {
            (Some(url), Some(name)) if !url.is_empty() && !name.is_empty() => Some((url, name)),
            _ => None,
        }
    }

    pub fn url_is_set(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

impl GardenConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(GardenConfig {
            common: common_config,
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "garden-service".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|e| !e.is_empty()),
            database: DatabaseConfig {
                url: optional_env("DATABASE_URL", is_prod)?,
                name: optional_env("DATABASE_NAME", is_prod)?,
            },
            swagger_enabled: env::var("SWAGGER_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        })
    }
}

/// Database settings are optional in dev; production refuses to start without them.
fn optional_env(key: &str, is_prod: bool) -> Result<Option<String>, AppError> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => Ok(Some(val)),
        _ if is_prod => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            key
        ))),
        _ => Ok(None),
    }
}
