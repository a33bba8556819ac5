//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{PortalError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_seed_config(&settings.seed)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate seed configuration
fn validate_seed_config(config: &super::SeedConfig) -> Result<()> {
    if let Some(path) = &config.path {
        if path.is_empty() {
            return Err(PortalError::Config(
                "Seed path must not be empty when set".to_string()
            ));
        }

        if !(path.ends_with(".json") || path.ends_with(".toml")) {
            return Err(PortalError::Config(
                format!("Unsupported seed file: {}. Expected a .json or .toml file", path)
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PortalError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PortalError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if matches!(config.directory.as_deref(), Some("")) {
        return Err(PortalError::Config(
            "Log directory must not be empty when set".to_string()
        ));
    }

    Ok(())
}
