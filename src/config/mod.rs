//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `USER_DIRECTORY` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use user_directory::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Young age limit: {}", config.directory.young_age_limit);
//! ```

mod directory;
mod error;
mod logging;
mod notifications;

pub use directory::DirectoryConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use notifications::NotificationsConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Values stamped onto derived user records
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Notification sinks
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `USER_DIRECTORY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `USER_DIRECTORY__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `USER_DIRECTORY__DIRECTORY__YOUNG_AGE_LIMIT=30` -> `directory.young_age_limit = 30`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("USER_DIRECTORY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.directory.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("USER_DIRECTORY__LOGGING__LEVEL");
        env::remove_var("USER_DIRECTORY__LOGGING__FORMAT");
        env::remove_var("USER_DIRECTORY__DIRECTORY__YOUNG_AGE_LIMIT");
        env::remove_var("USER_DIRECTORY__DIRECTORY__INITIAL_BIO");
        env::remove_var("USER_DIRECTORY__DIRECTORY__PROFILE_DATE");
        env::remove_var("USER_DIRECTORY__NOTIFICATIONS__CONSOLE");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.directory.young_age_limit, 25);
        assert_eq!(config.directory.initial_bio, "Usuario nuevo");
        assert!(config.notifications.console);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("USER_DIRECTORY__LOGGING__FORMAT", "json");
        env::set_var("USER_DIRECTORY__DIRECTORY__YOUNG_AGE_LIMIT", "30");
        env::set_var("USER_DIRECTORY__DIRECTORY__PROFILE_DATE", "2025-06-01");
        env::set_var("USER_DIRECTORY__NOTIFICATIONS__CONSOLE", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.logging.is_json());
        assert_eq!(config.directory.young_age_limit, 30);
        assert_eq!(config.directory.profile_date.to_string(), "2025-06-01");
        assert!(!config.notifications.console);
    }

    #[test]
    fn test_validate_rejects_zero_age_limit() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("USER_DIRECTORY__DIRECTORY__YOUNG_AGE_LIMIT", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidAgeLimit(0))
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
