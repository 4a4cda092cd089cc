//! Configuration management for siteformats
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (no overrides, built-in formats only)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use siteformats::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! let media_types = config.decode_media_types().expect("Invalid media types");
//! let formats = config.decode_output_formats(&media_types).expect("Invalid output formats");
//! println!("{} output formats", formats.len());
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `SITEFORMATS__<section>__<key>...`
//!
//! Examples:
//! - `SITEFORMATS__OUTPUT_FORMATS__HTML__BASE_NAME=home`
//! - `SITEFORMATS__OUTPUT_FORMATS__RSS__NO_UGLY=false`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/site.toml`.
//! This can be overridden using the `SITEFORMATS_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::Config;
pub use validation::ValidationError;

use crate::formats::{FormatError, OutputFormats};
use crate::media::{MediaTypeError, MediaTypes};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Invalid media type configuration: {0}")]
    MediaType(#[from] MediaTypeError),

    #[error("Invalid output format configuration: {0}")]
    Format(#[from] FormatError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`SITEFORMATS__*`)
    /// 2. TOML file (default: `config/site.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file is malformed
    /// - Validation fails (empty or dotted format names, etc.)
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Built-in media types with this configuration's overrides applied
    pub fn decode_media_types(&self) -> Result<MediaTypes, ConfigError> {
        Ok(MediaTypes::decode(std::slice::from_ref(&self.media_types))?)
    }

    /// Built-in output formats with this configuration's overrides applied
    pub fn decode_output_formats(
        &self,
        media_types: &MediaTypes,
    ) -> Result<OutputFormats, ConfigError> {
        Ok(OutputFormats::decode(
            media_types,
            std::slice::from_ref(&self.output_formats),
        )?)
    }
}
