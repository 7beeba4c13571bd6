//! Configuration management for the Contact Card demo binary.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Nothing here affects how a [`Contact`]
//! behaves; it only decides how the binary renders its sample contacts.
//!
//! [`Contact`]: crate::Contact

use crate::error::{ConfigError, ConfigResult};
use crate::models::DisplayMode;
use std::env;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the Contact Card binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Display mode applied to the sample contacts (default: masked)
    pub display_mode: DisplayMode,

    /// Specifier passed to `Contact::format` (default: "unmasked")
    pub format_spec: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_DISPLAY_MODE`: Display mode, any string (default: "masked")
    /// - `CONTACT_FORMAT_SPEC`: Format specifier (default: "unmasked")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvError` if a `.env` file exists but cannot be
    /// parsed, and `ConfigError::InvalidValue` for an unknown log level.
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Self::default();

        let display_mode = env::var("CONTACT_DISPLAY_MODE")
            .map(DisplayMode::from)
            .unwrap_or(defaults.display_mode);

        let format_spec = env::var("CONTACT_FORMAT_SPEC").unwrap_or(defaults.format_spec);

        let log_level = Self::parse_log_level("LOG_LEVEL", defaults.log_level)?;

        Ok(Config {
            display_mode,
            format_spec,
            log_level,
        })
    }

    /// Read a log level from the environment, lowercased and checked.
    fn parse_log_level(var_name: &str, default: String) -> ConfigResult<String> {
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
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display_mode: DisplayMode::Masked,
            format_spec: "unmasked".to_string(),
            log_level: "error".to_string(),
        }
    }
}
