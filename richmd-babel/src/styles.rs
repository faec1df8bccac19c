//! Symbol dictionaries shared by both conversion directions.
//!
//! - [`StyleDictionary`]: style name → Markdown symbol (serialization)
//! - [`InlineStyleTable`]: Markdown node type → style name and symbol (parsing)
//! - [`BlockStyleTable`]: Markdown node type → block type (parsing)
//!
//! Every table starts from built-in defaults. Extending a table is a shallow
//! merge: provided keys override, all other keys keep their defaults.

use crate::model::BlockType;
use std::collections::HashMap;

/// Symbol wrapping a fenced code block.
pub const CODE_FENCE: &str = "```";

/// A style as produced by parsing: the style name and its Markdown symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineStyleDef {
    pub style: String,
    pub symbol: String,
}

impl InlineStyleDef {
    pub fn new(style: impl Into<String>, symbol: impl Into<String>) -> Self {
        InlineStyleDef {
            style: style.into(),
            symbol: symbol.into(),
        }
    }
}

/// Maps style names (`BOLD`, `ITALIC`, ...) to the symbols that delimit them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDictionary {
    symbols: HashMap<String, String>,
}

impl Default for StyleDictionary {
    fn default() -> Self {
        let symbols = [("BOLD", "__"), ("ITALIC", "*")]
            .into_iter()
            .map(|(style, symbol)| (style.to_string(), symbol.to_string()))
            .collect();
        StyleDictionary { symbols }
    }
}

impl StyleDictionary {
    pub fn insert(&mut self, style: impl Into<String>, symbol: impl Into<String>) {
        self.symbols.insert(style.into(), symbol.into());
    }

    pub fn extend<I, K, V>(&mut self, extra: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (style, symbol) in extra {
            self.insert(style, symbol);
        }
    }

    pub fn symbol(&self, style: &str) -> Option<&str> {
        self.symbols.get(style).map(String::as_str)
    }
}

/// Maps Markdown node type names (`Strong`, `Emphasis`, ...) to styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineStyleTable {
    by_node: HashMap<String, InlineStyleDef>,
}

impl Default for InlineStyleTable {
    fn default() -> Self {
        let mut by_node = HashMap::new();
        by_node.insert("Strong".to_string(), InlineStyleDef::new("BOLD", "__"));
        by_node.insert("Emphasis".to_string(), InlineStyleDef::new("ITALIC", "*"));
        InlineStyleTable { by_node }
    }
}

impl InlineStyleTable {
    pub fn insert(&mut self, node_type: impl Into<String>, def: InlineStyleDef) {
        self.by_node.insert(node_type.into(), def);
    }

    pub fn extend<I, K>(&mut self, extra: I)
    where
        I: IntoIterator<Item = (K, InlineStyleDef)>,
        K: Into<String>,
    {
        for (node_type, def) in extra {
            self.insert(node_type, def);
        }
    }

    pub fn get(&self, node_type: &str) -> Option<&InlineStyleDef> {
        self.by_node.get(node_type)
    }
}

/// Maps Markdown node type names to block types.
///
/// Headers are looked up as `Header<depth>` (`Header1` .. `Header6`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStyleTable {
    by_node: HashMap<String, BlockType>,
}

impl Default for BlockStyleTable {
    fn default() -> Self {
        let by_node = [
            ("List", BlockType::UnorderedListItem),
            ("Header1", BlockType::HeaderOne),
            ("Header2", BlockType::HeaderTwo),
            ("Header3", BlockType::HeaderThree),
            ("Header4", BlockType::HeaderFour),
            ("Header5", BlockType::HeaderFive),
            ("Header6", BlockType::HeaderSix),
            ("CodeBlock", BlockType::CodeBlock),
            ("BlockQuote", BlockType::Blockquote),
        ]
        .into_iter()
        .map(|(node, block)| (node.to_string(), block))
        .collect();
        BlockStyleTable { by_node }
    }
}

impl BlockStyleTable {
    pub fn insert(&mut self, node_type: impl Into<String>, block_type: BlockType) {
        self.by_node.insert(node_type.into(), block_type);
    }

    pub fn extend<I, K>(&mut self, extra: I)
    where
        I: IntoIterator<Item = (K, BlockType)>,
        K: Into<String>,
    {
        for (node_type, block_type) in extra {
            self.insert(node_type, block_type);
        }
    }

    pub fn get(&self, node_type: &str) -> Option<BlockType> {
        self.by_node.get(node_type).copied()
    }
}

/// Fixed line prefix for a block type.
///
/// Ordered list items are numbered by the serializer and return `""` here.
pub fn block_prefix(block_type: BlockType) -> &'static str {
    match block_type {
        BlockType::UnorderedListItem => "- ",
        BlockType::HeaderOne => "# ",
        BlockType::HeaderTwo => "## ",
        BlockType::HeaderThree => "### ",
        BlockType::HeaderFour => "#### ",
        BlockType::HeaderFive => "##### ",
        BlockType::HeaderSix => "###### ",
        BlockType::Blockquote => "> ",
        BlockType::Unstyled
        | BlockType::OrderedListItem
        | BlockType::CodeBlock
        | BlockType::Atomic => "",
    }
}

/// Symbol placed on its own line before and after the block content, if any.
pub fn wrapping_symbol(block_type: BlockType) -> Option<&'static str> {
    match block_type {
        BlockType::CodeBlock => Some(CODE_FENCE),
        _ => None,
    }
}
