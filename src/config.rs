//! Configuration management
//!
//! Connection settings for the external catalog and credential databases.
//! The core never opens these connections itself; the settings are loaded,
//! validated, and handed to whatever store implementation the deployment
//! wires in.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Connection settings for the two relational collaborators.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// URL of the whiskey catalog database.
    pub catalog_url: String,

    /// URL of the user credential database.
    pub credentials_url: String,

    /// Connect timeout applied by the store implementation.
    pub connect_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_url: "mysql://localhost:3306/WHISKEY".to_string(),
            credentials_url: "mysql://localhost:3306/USERS".to_string(),
            connect_timeout_secs: 5,
        }
    }
}

impl StoreConfig {
    /// Load configuration from config.toml with environment overrides.
    ///
    /// A missing file falls back to the defaults; environment variables use
    /// the WIS prefix (WIS_CATALOG_URL and friends).
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = StoreConfig::default();
        let settings = Config::builder()
            .set_default("catalog_url", defaults.catalog_url)?
            .set_default("credentials_url", defaults.credentials_url)?
            .set_default("connect_timeout_secs", defaults.connect_timeout_secs)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("WIS"))
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Connect timeout as a Duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_url.is_empty() {
            return Err(ConfigError::Message("catalog_url cannot be empty".into()));
        }
        if self.credentials_url.is_empty() {
            return Err(ConfigError::Message(
                "credentials_url cannot be empty".into(),
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "connect_timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
