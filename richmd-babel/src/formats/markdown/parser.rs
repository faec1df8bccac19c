//! Markdown parsing (Markdown → rich text import)
//!
//! Pipeline: Markdown string → segments → per-segment syntax tree → flat block.
//! Each segment (one line, or one whole fenced code block) becomes exactly one
//! block; entities from all blocks share one document-wide map.

use crate::common::nested_to_flat::{flatten_nodes, EntityRegistry};
use crate::common::segments::split_blocks;
use crate::error::FormatError;
use crate::formats::markdown::ast::{ComrakParser, MarkdownParser, Node};
use crate::model::{Block, BlockType, EntityMap, RawDocument};
use crate::options::DeserializeOptions;
use crate::styles::BlockStyleTable;

/// Parse a Markdown string into a rich-text document using Comrak.
pub fn parse_from_markdown(
    source: &str,
    options: &DeserializeOptions,
) -> Result<RawDocument, FormatError> {
    parse_with_parser(source, options, &ComrakParser::default())
}

/// Parse a Markdown string with an injected parser.
///
/// Parser errors are returned as-is.
pub fn parse_with_parser(
    source: &str,
    options: &DeserializeOptions,
    parser: &dyn MarkdownParser,
) -> Result<RawDocument, FormatError> {
    let segments = split_blocks(source);
    let mut entities = EntityRegistry::new();
    let mut blocks = Vec::with_capacity(segments.len());

    for segment in &segments {
        blocks.push(flatten_segment(segment, options, parser, &mut entities)?);
    }

    let entity_map = if entities.is_empty() && options.entity_map_placeholder {
        EntityMap::placeholder()
    } else {
        entities.into_map()
    };

    Ok(RawDocument { blocks, entity_map })
}

/// Parse one segment and flatten it into a block.
pub fn flatten_segment(
    segment: &str,
    options: &DeserializeOptions,
    parser: &dyn MarkdownParser,
    entities: &mut EntityRegistry,
) -> Result<Block, FormatError> {
    let root = parser.parse(segment)?;
    let mut block = flatten_nodes(&root.children, &options.inline_styles, entities);
    block.block_type = resolve_block_type(root.children.first(), &options.block_styles);

    tracing::trace!(
        block_type = %block.block_type,
        chars = block.char_len(),
        styles = block.inline_style_ranges.len(),
        entities = block.entity_ranges.len(),
        "flattened segment"
    );

    Ok(block)
}

/// Determine the block type from the first top-level node of a segment.
pub fn resolve_block_type(first: Option<&Node>, block_styles: &BlockStyleTable) -> BlockType {
    let Some(node) = first else {
        return BlockType::Unstyled;
    };

    let resolved = match node {
        Node::List { ordered: true, .. } => Some(BlockType::OrderedListItem),
        Node::Header { depth, .. } => block_styles.get(&format!("Header{depth}")),
        Node::Paragraph(children) if matches!(children.first(), Some(Node::Image { .. })) => {
            Some(BlockType::Atomic)
        }
        other => block_styles.get(other.type_name()),
    };

    resolved.unwrap_or_else(|| {
        if !matches!(node, Node::Paragraph(_)) {
            tracing::debug!(node = node.type_name(), "no block style for node, using unstyled");
        }
        BlockType::Unstyled
    })
}
