//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file as a source of defaults.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Prompt shown before each command when none is configured.
pub const DEFAULT_PROMPT: &str = "Enter a command >>> ";

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Text written before reading each command (default: "Enter a command >>> ")
    pub prompt: String,

    /// Print the help banner when the session starts (default: true)
    pub show_banner: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PROMPT`: Prompt text (default: "Enter a command >>> ")
    /// - `ADDRESS_BOOK_SHOW_BANNER`: `true` or `false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let prompt =
            env::var("ADDRESS_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let show_banner = Self::parse_env_bool("ADDRESS_BOOK_SHOW_BANNER", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            prompt,
            show_banner,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            log_level: "error".to_string(),
        }
    }
}
