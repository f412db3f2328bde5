//! Configuration management for the contact book.
//!
//! Configuration only tunes diagnostics. The dialogue itself takes no flags or
//! environment variables. A `.env` file is loaded if present; dotenvy does not
//! write to stdout, which belongs to the dialogue.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config { log_level })
    }

    /// Load configuration, falling back to defaults when a value is invalid.
    ///
    /// The rejection is handed back so it can be reported once logging is up.
    pub fn from_env_or_default() -> (Self, Option<ConfigError>) {
        match Self::from_env() {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Parse an environment variable as a log level with a default value.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
        }
    }
}
