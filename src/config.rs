//! Configuration management for Toolcrib

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Usage hours a tool is expected to run between services
    pub service_interval_hours: f64,
    /// Register the five demo tools at startup
    pub seed_defaults: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShellConfig {
    /// Reserved word that abandons the current prompt sequence
    pub escape_word: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix TOOLCRIB_)
            .add_source(
                Environment::with_prefix("TOOLCRIB")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            service_interval_hours: 100.0,
            seed_defaults: true,
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            escape_word: "exit".to_string(),
        }
    }
}
