//! Core data structures for the rich-text document model.

use crate::model::entity_map::EntityMap;
use serde::{Deserialize, Serialize};

/// Key of an entry in the document's [`EntityMap`].
pub type EntityKey = u32;

/// Represents a whole rich-text document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawDocument {
    pub blocks: Vec<Block>,
    #[serde(rename = "entityMap", default)]
    pub entity_map: EntityMap,
}

/// One structural unit of the document (paragraph, list item, header, ...).
///
/// `text` holds only the plain characters; every offset and length in
/// `inline_style_ranges` and `entity_ranges` counts `char`s of `text`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub text: String,
    #[serde(rename = "type", default)]
    pub block_type: BlockType,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub inline_style_ranges: Vec<StyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<EntityRange>,
}

impl Block {
    /// Creates an unannotated block of the given type.
    pub fn new(block_type: BlockType, text: impl Into<String>) -> Self {
        Block {
            text: text.into(),
            block_type,
            ..Block::default()
        }
    }

    pub fn with_style(mut self, offset: usize, length: usize, style: impl Into<String>) -> Self {
        self.inline_style_ranges
            .push(StyleRange::new(offset, length, style));
        self
    }

    pub fn with_entity(mut self, key: EntityKey, offset: usize, length: usize) -> Self {
        self.entity_ranges.push(EntityRange {
            key,
            offset,
            length,
        });
        self
    }

    /// Length of the block text in `char`s, the unit all ranges are measured in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Structural type of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    #[default]
    Unstyled,
    UnorderedListItem,
    OrderedListItem,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    HeaderFour,
    HeaderFive,
    HeaderSix,
    Blockquote,
    CodeBlock,
    Atomic,
}

impl BlockType {
    /// The name used in the raw interchange format.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Unstyled => "unstyled",
            BlockType::UnorderedListItem => "unordered-list-item",
            BlockType::OrderedListItem => "ordered-list-item",
            BlockType::HeaderOne => "header-one",
            BlockType::HeaderTwo => "header-two",
            BlockType::HeaderThree => "header-three",
            BlockType::HeaderFour => "header-four",
            BlockType::HeaderFive => "header-five",
            BlockType::HeaderSix => "header-six",
            BlockType::Blockquote => "blockquote",
            BlockType::CodeBlock => "code-block",
            BlockType::Atomic => "atomic",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inline formatting span over a block's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: String,
}

impl StyleRange {
    pub fn new(offset: usize, length: usize, style: impl Into<String>) -> Self {
        StyleRange {
            offset,
            length,
            style: style.into(),
        }
    }

    /// Index of the last character covered, `None` for an empty range or one
    /// whose end does not fit in `usize`.
    pub fn last_index(&self) -> Option<usize> {
        last_index(self.offset, self.length)
    }
}

/// A reference from a span of block text to an [`EntityMap`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRange {
    pub key: EntityKey,
    pub offset: usize,
    pub length: usize,
}

impl EntityRange {
    /// See [`StyleRange::last_index`].
    pub fn last_index(&self) -> Option<usize> {
        last_index(self.offset, self.length)
    }
}

fn last_index(offset: usize, length: usize) -> Option<usize> {
    offset.checked_add(length)?.checked_sub(1).filter(|_| length > 0)
}

/// Out-of-line data for a link or an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub mutability: Mutability,
    pub data: EntityData,
}

impl Entity {
    pub fn link(url: impl Into<String>) -> Self {
        Entity {
            entity_type: EntityType::Link,
            mutability: Mutability::Mutable,
            data: EntityData {
                url: Some(url.into()),
                ..EntityData::default()
            },
        }
    }

    /// Image entities duplicate the url into `src` and carry the alt text as `fileName`.
    pub fn image(url: impl Into<String>, file_name: impl Into<String>) -> Self {
        let url = url.into();
        Entity {
            entity_type: EntityType::Image,
            mutability: Mutability::Immutable,
            data: EntityData {
                src: Some(url.clone()),
                url: Some(url),
                file_name: Some(file_name.into()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
    Link,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mutability {
    Mutable,
    Immutable,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(
        rename = "fileName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub file_name: Option<String>,
}
