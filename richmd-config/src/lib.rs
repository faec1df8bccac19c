//! Shared configuration loader for richmd conversions.
//!
//! `defaults/richmd.default.toml` is embedded into the crate so that the
//! documented defaults and runtime behavior stay in sync. Applications layer
//! their own files on top via [`Loader`] before deserializing into
//! [`RichmdConfig`], then turn the result into conversion options.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use richmd_babel::{BlockType, DeserializeOptions, MissingSymbolPolicy, SerializeOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/richmd.default.toml");

/// Top-level configuration consumed by richmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RichmdConfig {
    pub serialize: SerializeConfig,
    pub deserialize: DeserializeConfig,
    #[serde(default)]
    pub styles: Vec<StyleEntry>,
    #[serde(default)]
    pub blocks: Vec<BlockEntry>,
}

/// Document → Markdown knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct SerializeConfig {
    pub missing_symbol: MissingSymbolPolicy,
}

/// Markdown → document knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct DeserializeConfig {
    pub entity_map_placeholder: bool,
}

/// An extra inline style.
///
/// Without a `node` the style only affects export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleEntry {
    pub style: String,
    pub symbol: String,
    pub node: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockEntry {
    pub node: String,
    pub block: BlockType,
}

impl From<&RichmdConfig> for SerializeOptions {
    fn from(config: &RichmdConfig) -> Self {
        let mut options =
            SerializeOptions::default().with_missing_symbol(config.serialize.missing_symbol);
        options.styles.extend(
            config
                .styles
                .iter()
                .map(|entry| (entry.style.clone(), entry.symbol.clone())),
        );
        options
    }
}

impl From<&RichmdConfig> for DeserializeOptions {
    fn from(config: &RichmdConfig) -> Self {
        let mut options = DeserializeOptions::default()
            .with_entity_map_placeholder(config.deserialize.entity_map_placeholder);
        for entry in &config.styles {
            if let Some(node) = &entry.node {
                options = options.with_inline_style(node, &entry.style, &entry.symbol);
            }
        }
        for entry in &config.blocks {
            options = options.with_block_style(&entry.node, entry.block);
        }
        options
    }
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

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RichmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RichmdConfig, ConfigError> {
    Loader::new().build()
}
