//! Host configuration parsed from environment variables.

use client::config::RuntimeConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Mark cookies written by the server as `Secure`.
    pub cookie_secure: bool,
    /// Public values handed to the browser app.
    pub runtime: RuntimeConfig,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: default false
    /// - `API_URL`, `WS_URL`: default empty
    /// - `ERROR_MESSAGE`, `SUCCESS_MESSAGE`, `NO_RESULTS_MESSAGE`: built-in copy when absent
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let cookie_secure = env_bool("COOKIE_SECURE").unwrap_or(false);

        let defaults = RuntimeConfig::default();
        let runtime = RuntimeConfig {
            error_message: env_or("ERROR_MESSAGE", defaults.error_message),
            success_message: env_or("SUCCESS_MESSAGE", defaults.success_message),
            no_results_message: env_or("NO_RESULTS_MESSAGE", defaults.no_results_message),
            api_url: env_or("API_URL", defaults.api_url),
            ws_url: env_or("WS_URL", defaults.ws_url),
        };

        Ok(Self { port, cookie_secure, runtime })
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
