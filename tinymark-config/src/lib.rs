//! Shared configuration loader for tinymark.
//!
//! `defaults/tinymark.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TinymarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tinymark::RenderTarget;

const DEFAULT_TOML: &str = include_str!("../defaults/tinymark.default.toml");

/// Top-level configuration consumed by tinymark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TinymarkConfig {
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

/// How the conversion target is chosen when the command line leaves it open.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_format: RenderTarget,
    pub detect_from_extension: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A `log::LevelFilter` name: off, error, warn, info, debug or trace.
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TinymarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TinymarkConfig, ConfigError> {
    Loader::new().build()
}
