use std::env;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:promptforge.db";
pub const DEFAULT_GENAI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),
}

/// Server configuration read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub genai_api_key: String,
    pub genai_model: String,
    /// Override for the model endpoint; used by tests and local stubs.
    pub genai_base_url: Option<String>,
    /// When absent the server runs anonymous-only and never resolves users.
    pub identity_api_key: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let genai_api_key =
            env::var("GENAI_API_KEY").map_err(|_| ConfigError::MissingVar("GENAI_API_KEY"))?;

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            genai_api_key,
            genai_model: env::var("GENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GENAI_MODEL.to_string()),
            genai_base_url: env::var("GENAI_BASE_URL").ok(),
            identity_api_key: env::var("IDENTITY_API_KEY").ok(),
        })
    }
}
