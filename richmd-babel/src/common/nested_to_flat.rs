//! Flattens a Markdown syntax tree into block text plus offset ranges.
//!
//! # The High-Level Concept
//!
//! Markdown nests formatting (`*a __b__*`), the block model lays it flat
//! (text `a b`, `ITALIC` over `a `, `BOLD` over `b`). Walking the tree in
//! pre-order and appending every leaf's text to one buffer gives the flat
//! text; the buffer length at the moment a node is entered is that node's
//! offset, and the rendered length of its leaves is the range length.
//!
//! # The Algorithm
//!
//! Each node is visited with the style of its parent in context (the style the
//! inline table maps the parent's node type to, if any):
//!
//! 1. **Entities:** a `Link` registers a `LINK` entity and records a range over
//!    the rendered length of its children; an `Image` registers an `IMAGE`
//!    entity and records a range of length 1.
//! 2. **Containers:** with a style in context, record a range over the
//!    rendered length of all descendant leaves, then visit the children with
//!    the container's own style in context.
//! 3. **Leaves:** with a style in context, record a range over the leaf's
//!    text, then append the text (a single space for an image).
//!
//! Entity keys come from an [`EntityRegistry`] shared by every block of the
//! document, so keys stay unique and increase across the whole document.

use crate::formats::markdown::ast::{rendered_len_of, Node};
use crate::model::{Block, BlockType, Entity, EntityKey, EntityMap, EntityRange, StyleRange};
use crate::styles::{InlineStyleDef, InlineStyleTable};

/// Document-wide entity map with an explicit key counter.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    map: EntityMap,
    next_key: EntityKey,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an entity under the next unused key.
    pub fn register(&mut self, entity: Entity) -> EntityKey {
        let key = self.next_key;
        self.next_key += 1;
        self.map.insert(key, entity);
        key
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn into_map(self) -> EntityMap {
        self.map
    }
}

/// Flatten the top-level nodes of one segment into an `unstyled` block.
///
/// The caller decides the block type.
pub fn flatten_nodes(
    nodes: &[Node],
    inline_styles: &InlineStyleTable,
    entities: &mut EntityRegistry,
) -> Block {
    let mut flattener = Flattener {
        inline_styles,
        entities,
        text: String::new(),
        len: 0,
        style_ranges: Vec::new(),
        entity_ranges: Vec::new(),
    };

    for node in nodes {
        let style = inline_styles.get(node.type_name());
        flattener.walk(node, style);
    }

    Block {
        text: flattener.text,
        block_type: BlockType::Unstyled,
        depth: 0,
        inline_style_ranges: flattener.style_ranges,
        entity_ranges: flattener.entity_ranges,
    }
}

struct Flattener<'a> {
    inline_styles: &'a InlineStyleTable,
    entities: &'a mut EntityRegistry,
    text: String,
    /// Length of `text` in chars.
    len: usize,
    style_ranges: Vec<StyleRange>,
    entity_ranges: Vec<EntityRange>,
}

impl<'a> Flattener<'a> {
    fn walk(&mut self, node: &Node, style: Option<&'a InlineStyleDef>) {
        match node {
            Node::Link { url, children } => {
                let key = self.entities.register(Entity::link(url.clone()));
                self.add_entity_range(key, rendered_len_of(children));
            }
            Node::Image { url, alt } => {
                let key = self.entities.register(Entity::image(url.clone(), alt.clone()));
                self.add_entity_range(key, 1);
            }
            _ => {}
        }

        match node.children() {
            Some(children) => {
                if let Some(style) = style {
                    self.add_style_range(rendered_len_of(children), style);
                }
                let table = self.inline_styles;
                let child_style = table.get(node.type_name());
                for child in children {
                    self.walk(child, child_style);
                }
            }
            None => {
                let leaf = node.leaf_text().unwrap_or_default();
                let leaf_len = leaf.chars().count();
                if let Some(style) = style {
                    self.add_style_range(leaf_len, style);
                }
                self.text.push_str(leaf);
                self.len += leaf_len;
            }
        }
    }

    fn add_style_range(&mut self, length: usize, style: &InlineStyleDef) {
        if length == 0 {
            return;
        }
        self.style_ranges
            .push(StyleRange::new(self.len, length, style.style.clone()));
    }

    fn add_entity_range(&mut self, key: EntityKey, length: usize) {
        self.entity_ranges.push(EntityRange {
            key,
            offset: self.len,
            length,
        });
    }
}
