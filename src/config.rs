//! Configuration management for the contact book.
//!
//! This module handles loading configuration from environment variables.
//! Stdout carries the command replies, so nothing here ever prints to it;
//! `.env` loading goes through `dotenvy`, which is silent.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default prompt shown before each input line.
const DEFAULT_PROMPT: &str = ">>> ";

/// Default log level when neither `RUST_LOG` nor `LOG_LEVEL` is set.
const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt text printed before each input line (default: ">>> ")
    pub prompt: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PROMPT`: prompt text (default: ">>> ")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let prompt =
            env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        // A blank prompt would make sessions unreadable
        if prompt.trim().is_empty() && !prompt.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PROMPT".to_string(),
                reason: "Cannot be blank (unset it to use the default)".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config { prompt, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.prompt, ">>> ");
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("CONTACT_BOOK_PROMPT");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, ">>> ");
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_PROMPT", "book> ");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, "book> ");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_rejects_blank_prompt() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_PROMPT", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "CONTACT_BOOK_PROMPT");
        }
    }

    #[test]
    #[serial]
    fn test_config_allows_empty_prompt() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_PROMPT", "");

        // An explicitly empty prompt is a valid quiet mode
        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, "");
    }
}
