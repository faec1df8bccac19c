//! Options for both conversion directions.

use crate::model::BlockType;
use crate::styles::{BlockStyleTable, InlineStyleDef, InlineStyleTable, StyleDictionary};
use serde::Deserialize;

/// What the serializer does with a style that has no symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSymbolPolicy {
    /// Fail with [`crate::FormatError::MissingStyleSymbol`].
    #[default]
    Error,
    /// Emit the span as plain text.
    Skip,
}

/// Options for rich text → Markdown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SerializeOptions {
    pub styles: StyleDictionary,
    pub missing_symbol: MissingSymbolPolicy,
}

impl SerializeOptions {
    pub fn with_style(mut self, style: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.styles.insert(style, symbol);
        self
    }

    pub fn with_missing_symbol(mut self, policy: MissingSymbolPolicy) -> Self {
        self.missing_symbol = policy;
        self
    }
}

/// Options for Markdown → rich text.
#[derive(Debug, Clone, PartialEq)]
pub struct DeserializeOptions {
    pub inline_styles: InlineStyleTable,
    pub block_styles: BlockStyleTable,
    /// Replace an empty entity map with the compatibility placeholder entry.
    pub entity_map_placeholder: bool,
}

impl Default for DeserializeOptions {
    fn default() -> Self {
        DeserializeOptions {
            inline_styles: InlineStyleTable::default(),
            block_styles: BlockStyleTable::default(),
            entity_map_placeholder: true,
        }
    }
}

impl DeserializeOptions {
    pub fn with_inline_style(
        mut self,
        node_type: impl Into<String>,
        style: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        self.inline_styles
            .insert(node_type, InlineStyleDef::new(style, symbol));
        self
    }

    pub fn with_block_style(mut self, node_type: impl Into<String>, block_type: BlockType) -> Self {
        self.block_styles.insert(node_type, block_type);
        self
    }

    pub fn with_entity_map_placeholder(mut self, enabled: bool) -> Self {
        self.entity_map_placeholder = enabled;
        self
    }
}
