use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_PRESENCE_PENALTY: f32 = 0.3;
pub const DEFAULT_FREQUENCY_PENALTY: f32 = 0.1;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: String,
    pub openai_model: String,
    pub openai_max_tokens: u32,
    pub openai_temperature: f32,
    pub openai_presence_penalty: f32,
    pub openai_frequency_penalty: f32,
    pub openai_timeout_secs: u64,
    pub openai_transport_retries: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests never touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            web_server_host: non_empty("WEB_SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_server_port: non_empty("WEB_SERVER_PORT")
                .or_else(|| non_empty("PORT"))
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            openai_api_key: non_empty("OPENAI_API_KEY")
                .or_else(|| non_empty("REACT_APP_OPENAI_API_KEY"))
                .map(SecretString::from),
            openai_api_base: non_empty("OPENAI_API_BASE")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
            openai_model: non_empty("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_max_tokens: non_empty("OPENAI_MAX_TOKENS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(7000),
            openai_temperature: non_empty("OPENAI_TEMPERATURE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.7),
            openai_presence_penalty: non_empty("OPENAI_PRESENCE_PENALTY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PRESENCE_PENALTY),
            openai_frequency_penalty: non_empty("OPENAI_FREQUENCY_PENALTY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FREQUENCY_PENALTY),
            openai_timeout_secs: non_empty("OPENAI_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(90),
            openai_transport_retries: non_empty("OPENAI_TRANSPORT_RETRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.openai_timeout_secs)
    }

    /// Rejects sampling settings the completion API would refuse.
    ///
    /// A missing API key is not an error here: the server still starts and
    /// serves fallback recommendations.
    pub fn validate(&self) -> AppResult<()> {
        if self.openai_max_tokens == 0 {
            return Err(AppError::ConfigurationError(
                "OPENAI_MAX_TOKENS must be greater than zero".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.openai_temperature) {
            return Err(AppError::ConfigurationError(format!(
                "OPENAI_TEMPERATURE must be between 0.0 and 2.0, got {}",
                self.openai_temperature
            )));
        }

        for (name, penalty) in [
            ("OPENAI_PRESENCE_PENALTY", self.openai_presence_penalty),
            ("OPENAI_FREQUENCY_PENALTY", self.openai_frequency_penalty),
        ] {
            if !(-2.0..=2.0).contains(&penalty) {
                return Err(AppError::ConfigurationError(format!(
                    "{} must be between -2.0 and 2.0, got {}",
                    name, penalty
                )));
            }
        }

        if self.openai_timeout_secs == 0 {
            return Err(AppError::ConfigurationError(
                "OPENAI_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        if self.openai_transport_retries > 1 {
            return Err(AppError::ConfigurationError(format!(
                "OPENAI_TRANSPORT_RETRIES allows at most one retry, got {}",
                self.openai_transport_retries
            )));
        }

        if self.openai_model.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "OPENAI_MODEL must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3001,
            openai_api_key: None,
            openai_api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_max_tokens: 7000,
            openai_temperature: 0.7,
            openai_presence_penalty: DEFAULT_PRESENCE_PENALTY,
            openai_frequency_penalty: DEFAULT_FREQUENCY_PENALTY,
            openai_timeout_secs: 5,
            openai_transport_retries: 1,
        }
    }
}
