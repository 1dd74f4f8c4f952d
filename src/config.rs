//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `API_PORT` - Listen port; the service binds `0.0.0.0:<port>`
//!
//! ## Optional Variables
//!
//! - `DEBUG` - Debug flag; lowers the default log level to `debug`
//!   (default: `false`; accepts `true`/`1`, case-insensitive)
//! - `RUST_LOG` - Log level (default: `info`, or `debug` when `DEBUG` is set)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DISPATCH_COMMAND` - External dispatcher binary (default: `lk`)
//! - `DISPATCH_AGENT_NAME` - Agent name passed to the dispatcher
//!   (default: `ahoum-facilitator-onboarding`)
//! - `DISPATCH_TIMEOUT_SECS` - Per-call wall-clock timeout (default: 30)
//! - `DISPATCH_CONCURRENCY` - Max concurrent batch dispatches (default: 10)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::DispatchSettings;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port; the service binds `0.0.0.0:<port>`.
    pub api_port: u16,
    /// When true, the default log level drops to `debug`.
    pub debug: bool,
    pub log_level: String,
    pub log_format: String,
    /// External dispatcher binary invoked per call.
    pub dispatch_command: String,
    /// Value passed to the dispatcher as `--agent-name`.
    pub dispatch_agent_name: String,
    /// Wall-clock bound for one dispatch command, in seconds.
    pub dispatch_timeout_secs: u64,
    /// Maximum number of dispatch commands in flight during a batch.
    pub dispatch_concurrency: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_PORT` is missing or not a valid port.
    pub fn from_env() -> Result<Self> {
        let api_port = env::var("API_PORT")
            .context("API_PORT must be set")?
            .parse::<u16>()
            .context("API_PORT must be a valid port number")?;

        let debug = env::var("DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let default_level = if debug { "debug" } else { "info" };
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let dispatch_command = env::var("DISPATCH_COMMAND").unwrap_or_else(|_| "lk".to_string());

        let dispatch_agent_name = env::var("DISPATCH_AGENT_NAME")
            .unwrap_or_else(|_| "ahoum-facilitator-onboarding".to_string());

        let dispatch_timeout_secs = env::var("DISPATCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let dispatch_concurrency = env::var("DISPATCH_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            api_port,
            debug,
            log_level,
            log_format,
            dispatch_command,
            dispatch_agent_name,
            dispatch_timeout_secs,
            dispatch_concurrency,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_port` is 0
    /// - `log_format` is not `text` or `json`
    /// - `dispatch_command` or `dispatch_agent_name` is empty
    /// - `dispatch_timeout_secs` is outside [1, 600]
    /// - `dispatch_concurrency` is outside [1, 64]
    pub fn validate(&self) -> Result<()> {
        if self.api_port == 0 {
            anyhow::bail!("API_PORT must not be 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.dispatch_command.is_empty() {
            anyhow::bail!("DISPATCH_COMMAND must not be empty");
        }

        if self.dispatch_agent_name.is_empty() {
            anyhow::bail!("DISPATCH_AGENT_NAME must not be empty");
        }

        if self.dispatch_timeout_secs == 0 || self.dispatch_timeout_secs > 600 {
            anyhow::bail!(
                "DISPATCH_TIMEOUT_SECS must be between 1 and 600, got {}",
                self.dispatch_timeout_secs
            );
        }

        if self.dispatch_concurrency == 0 || self.dispatch_concurrency > 64 {
            anyhow::bail!(
                "DISPATCH_CONCURRENCY must be between 1 and 64, got {}",
                self.dispatch_concurrency
            );
        }

        Ok(())
    }

    /// Derives the immutable settings value handed to the dispatch service.
    pub fn dispatch_settings(&self) -> DispatchSettings {
        DispatchSettings {
            command: self.dispatch_command.clone(),
            agent_name: self.dispatch_agent_name.clone(),
            timeout: Duration::from_secs(self.dispatch_timeout_secs),
            batch_concurrency: self.dispatch_concurrency,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: 0.0.0.0:{}", self.api_port);
        tracing::info!("  Debug: {}", self.debug);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Dispatch command: {}", self.dispatch_command);
        tracing::info!("  Dispatch agent: {}", self.dispatch_agent_name);
        tracing::info!("  Dispatch timeout: {}s", self.dispatch_timeout_secs);
        tracing::info!("  Batch concurrency: {}", self.dispatch_concurrency);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            api_port: 5001,
            debug: false,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            dispatch_command: "lk".to_string(),
            dispatch_agent_name: "ahoum-facilitator-onboarding".to_string(),
            dispatch_timeout_secs: 30,
            dispatch_concurrency: 10,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.api_port = 0;
        assert!(config.validate().is_err());
        config.api_port = 5001;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.dispatch_command = String::new();
        assert!(config.validate().is_err());
        config.dispatch_command = "lk".to_string();

        config.dispatch_timeout_secs = 0;
        assert!(config.validate().is_err());
        config.dispatch_timeout_secs = 601;
        assert!(config.validate().is_err());
        config.dispatch_timeout_secs = 30;

        config.dispatch_concurrency = 0;
        assert!(config.validate().is_err());
        config.dispatch_concurrency = 65;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dispatch_settings_derivation() {
        let settings = test_config().dispatch_settings();

        assert_eq!(settings.command, "lk");
        assert_eq!(settings.agent_name, "ahoum-facilitator-onboarding");
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.batch_concurrency, 10);
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_port() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("API_PORT");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("API_PORT", "5001");
            env::remove_var("DEBUG");
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
            env::remove_var("DISPATCH_COMMAND");
            env::remove_var("DISPATCH_AGENT_NAME");
            env::remove_var("DISPATCH_TIMEOUT_SECS");
            env::remove_var("DISPATCH_CONCURRENCY");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_port, 5001);
        assert!(!config.debug);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.dispatch_command, "lk");
        assert_eq!(config.dispatch_agent_name, "ahoum-facilitator-onboarding");
        assert_eq!(config.dispatch_timeout_secs, 30);
        assert_eq!(config.dispatch_concurrency, 10);

        // Cleanup
        unsafe {
            env::remove_var("API_PORT");
        }
    }

    #[test]
    #[serial]
    fn test_debug_flag_lowers_default_log_level() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("API_PORT", "5001");
            env::set_var("DEBUG", "True");
            env::remove_var("RUST_LOG");
        }

        let config = Config::from_env().unwrap();
        assert!(config.debug);
        assert_eq!(config.log_level, "debug");

        // RUST_LOG still wins over the DEBUG-derived default
        unsafe {
            env::set_var("RUST_LOG", "warn");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "warn");

        // Cleanup
        unsafe {
            env::remove_var("API_PORT");
            env::remove_var("DEBUG");
            env::remove_var("RUST_LOG");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_port_rejected() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("API_PORT", "not-a-port");
        }

        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("API_PORT");
        }
    }
}
