//! Shared configuration loader for the subverso toolchain.
//!
//! `defaults/subverso.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`SubversoConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use subverso_render::formats::html::HtmlOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/subverso.default.toml");

/// Top-level configuration consumed by subverso applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SubversoConfig {
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

/// Conversion defaults and output-specific knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Output used when nothing else selects one.
    pub default_output: String,
    pub html: HtmlConfig,
}

/// Mirrors the knobs exposed by the HTML output.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub document: bool,
    pub custom_css: String,
}

impl From<HtmlConfig> for HtmlOptions {
    fn from(config: HtmlConfig) -> Self {
        HtmlOptions {
            document: config.document,
            custom_css: if config.custom_css.is_empty() {
                None
            } else {
                Some(config.custom_css)
            },
        }
    }
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        config.clone().into()
    }
}

/// Controls inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub tree: TreeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeConfig {
    pub show_positions: bool,
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
    pub fn build(self) -> Result<SubversoConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SubversoConfig, ConfigError> {
    Loader::new().build()
}
