//! Configuration System
//!
//! Layered settings for the replay tool and for embedders: built-in defaults, then an
//! optional TOML file, then `MACHINE_MODEL__*` environment variables.

use crate::error::SettingsError;
use crate::logging::LoggingConfig;
use crate::merge::MergeOptions;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment prefix; nested keys use a double underscore (`MACHINE_MODEL__MERGE__LIST_TRUNCATION`).
pub const ENV_PREFIX: &str = "MACHINE_MODEL";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Merge engine tunables
    #[serde(default)]
    pub merge: MergeOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.logging.validate().map_err(SettingsError::Invalid)
    }
}

pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from defaults, an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Settings, SettingsError> {
        let mut builder = builder_with_defaults()?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Config builder with the built-in defaults applied.
fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, SettingsError> {
    let defaults = LoggingConfig::default();
    Ok(Config::builder()
        .set_default("merge.list_truncation", "never")?
        .set_default("logging.level", defaults.level)?
        .set_default("logging.format", defaults.format)?
        .set_default("logging.output", defaults.output)?)
}
