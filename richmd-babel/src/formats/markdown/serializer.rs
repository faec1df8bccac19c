//! Markdown serialization (rich text → Markdown export)
//!
//! Pipeline per block: line prefix → inline markup (see
//! [`crate::common::flat_to_nested`]) → block wrapping → atomic image
//! substitution. Blocks are joined with a single newline.

use crate::common::flat_to_nested::render_inline;
use crate::error::FormatError;
use crate::model::{Block, BlockType, EntityMap, RawDocument};
use crate::options::SerializeOptions;
use crate::styles::{block_prefix, wrapping_symbol};

/// Serialize a rich-text document to Markdown.
pub fn serialize_to_markdown(
    doc: &RawDocument,
    options: &SerializeOptions,
) -> Result<String, FormatError> {
    let mut output = String::new();
    // Ordered items are numbered across the whole document, not per run.
    let mut ordered_items = 0usize;

    for (index, block) in doc.blocks.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        if block.block_type == BlockType::OrderedListItem {
            ordered_items += 1;
            output.push_str(&format!("{ordered_items}. "));
        } else {
            output.push_str(block_prefix(block.block_type));
        }

        output.push_str(&serialize_block(index, block, &doc.entity_map, options)?);
    }

    Ok(output)
}

/// Serialize a block's content, without its line prefix.
pub fn serialize_block(
    index: usize,
    block: &Block,
    entity_map: &EntityMap,
    options: &SerializeOptions,
) -> Result<String, FormatError> {
    let content = render_inline(block, entity_map, options)?;
    let content = apply_wrapping_block_style(block.block_type, content);

    if block.block_type == BlockType::Atomic {
        apply_atomic_style(index, block, entity_map, &content)
    } else {
        Ok(content)
    }
}

fn apply_wrapping_block_style(block_type: BlockType, content: String) -> String {
    match wrapping_symbol(block_type) {
        Some(symbol) => format!("{symbol}\n{content}\n{symbol}"),
        None => content,
    }
}

/// Replace the placeholder text of an atomic block with image syntax.
fn apply_atomic_style(
    index: usize,
    block: &Block,
    entity_map: &EntityMap,
    content: &str,
) -> Result<String, FormatError> {
    let keep = content.chars().count().saturating_sub(block.char_len());
    let stripped: String = content.chars().take(keep).collect();

    let range = block
        .entity_ranges
        .first()
        .ok_or(FormatError::MissingImageEntity { block: index })?;
    let entity = entity_map
        .get(range.key)
        .ok_or(FormatError::UnknownEntity(range.key))?;

    let data = &entity.data;
    let url = data
        .url
        .as_deref()
        .filter(|url| !url.is_empty())
        .or(data.src.as_deref())
        .unwrap_or_default();
    let alt = data.file_name.as_deref().unwrap_or_default();

    Ok(format!("{stripped}![{alt}]({url})"))
}
