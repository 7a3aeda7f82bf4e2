//! Settings of the command line tool: which comments are group markers, and how the outline
//! is printed.
//!
//! The defaults ship inside the binary (`defaults/outline.default.toml`); see [Loader] for how
//! user files and flags are put on top of them.

use crate::outline::parsing::GroupMarkers;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../../defaults/outline.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineConfig {
    pub markers: MarkersConfig,
    pub output: OutputConfig,
}

impl OutlineConfig {
    /// Group marker prefixes for the analyzer
    pub fn markers(&self) -> GroupMarkers {
        GroupMarkers::new(self.markers.begin.clone(), self.markers.end.clone())
    }
}

/// Comment prefixes delimiting foldable groups.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkersConfig {
    pub begin: String,
    pub end: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered format
    pub format: String,
    pub show_line_numbers: bool,
}

/// Builds an [OutlineConfig] from the embedded `outline.default.toml`, then any grammar-outline
/// TOML files in the order they are added, then single-key overrides from the command line.
/// Later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Add a TOML file such as the one given with `--config`. [build](Loader::build) fails if
    /// it doesn't exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), true)
    }

    /// Add a TOML file that may be absent, e.g. a per-project `grammar-outline.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), false)
    }

    /// Override one dotted key, e.g. `output.format`.
    pub fn set_override<I>(self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        let builder = self.builder.set_override(key, value)?;
        Ok(Self { builder })
    }

    pub fn build(self) -> Result<OutlineConfig, ConfigError> {
        let config: OutlineConfig = self.builder.build()?.try_deserialize()?;
        debug!(
            format = %config.output.format,
            begin = %config.markers.begin,
            end = %config.markers.end,
            "resolved configuration"
        );
        Ok(config)
    }

    fn layer_toml(self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        Self {
            builder: self.builder.add_source(file),
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone, without user files or overrides.
pub fn load_defaults() -> Result<OutlineConfig, ConfigError> {
    Loader::new().build()
}
