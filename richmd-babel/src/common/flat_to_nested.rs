//! Converts a flat block (plain text + offset ranges) into nested Markdown markup.
//!
//! # The High-Level Concept
//!
//! A block stores its formatting as flat ranges over plain text, while Markdown
//! expresses the same formatting by nesting symbol pairs around the text. The
//! converter walks the text one character at a time and keeps a stack of
//! "open" styles, the same way a tree builder keeps a stack of open containers.
//! Opening a style writes its symbol and pushes it; reaching the last character
//! of a style writes the symbol again and pops it.
//!
//! # The Algorithm
//!
//! For each character index `i`:
//!
//! 1. **Open styles:** every style range starting at `i` writes its symbol, in
//!    the order the ranges are listed, and is pushed with the output position
//!    where its opening symbol begins.
//! 2. **Open entities:** entity ranges starting at `i` write their leading
//!    marker (`[` for links, nothing for images).
//! 3. **Character:** the character itself is written.
//! 4. **Close entities:** entity ranges ending at `i` write their trailing
//!    marker (`](url)` for links).
//! 5. **Close styles:** every open style whose last character is `i` is popped
//!    (LIFO), writes its closing symbol and has its whitespace fixed up.
//!
//! # Whitespace Fixup
//!
//! Markdown symbols must hug non-whitespace content: `__  bold  __` does not
//! render as bold. After closing a span, leading and trailing whitespace
//! inside the symbols is moved outside of them, so `__  hi  __` becomes
//! `  __hi__  `. A span holding only whitespace loses its symbols entirely.
//!
//! # Malformed Ranges
//!
//! Ranges are expected to nest. When a style that is not on top of the stack
//! ends, the styles above it are closed, it is closed, and the styles above
//! are re-opened so the output stays well nested. Ranges running past the end
//! of the text are closed after the last character. Empty ranges are ignored.

use crate::error::FormatError;
use crate::model::{Block, Entity, EntityMap, EntityRange, EntityType, StyleRange};
use crate::options::{MissingSymbolPolicy, SerializeOptions};
use std::collections::HashMap;

/// Render a block's text with inline style symbols and entity markers.
///
/// Block-level syntax (prefixes, fences, image substitution) is not applied
/// here; see [`crate::formats::markdown::serializer`].
pub fn render_inline(
    block: &Block,
    entity_map: &EntityMap,
    options: &SerializeOptions,
) -> Result<String, FormatError> {
    let mut builder = MarkupBuilder::new(options);

    let mut style_starts: HashMap<usize, Vec<(&StyleRange, usize)>> = HashMap::new();
    for range in &block.inline_style_ranges {
        let Some(last) = range.last_index() else {
            tracing::debug!(
                style = %range.style,
                offset = range.offset,
                "ignoring empty or out-of-bounds style range"
            );
            continue;
        };
        style_starts.entry(range.offset).or_default().push((range, last));
    }

    let mut entity_starts: HashMap<usize, Vec<&Entity>> = HashMap::new();
    let mut entity_ends: HashMap<usize, Vec<&Entity>> = HashMap::new();
    for range in &block.entity_ranges {
        let Some(last) = range.last_index() else {
            tracing::debug!(
                key = range.key,
                offset = range.offset,
                "ignoring empty or out-of-bounds entity range"
            );
            continue;
        };
        let entity = lookup_entity(entity_map, range)?;
        entity_starts.entry(range.offset).or_default().push(entity);
        entity_ends.entry(last).or_default().push(entity);
    }

    for (index, ch) in block.text.chars().enumerate() {
        if let Some(ranges) = style_starts.get(&index) {
            for (range, last) in ranges {
                builder.open(range, *last)?;
            }
        }

        if let Some(entities) = entity_starts.get(&index) {
            for entity in entities {
                builder.out.push_str(entity_start_marker(entity));
            }
        }

        builder.out.push(ch);

        if let Some(entities) = entity_ends.get(&index) {
            for entity in entities {
                builder.out.push_str(&entity_end_marker(entity));
            }
        }

        builder.close_ending_at(index);
    }

    builder.close_remaining();
    Ok(builder.out)
}

fn lookup_entity<'a>(
    entity_map: &'a EntityMap,
    range: &EntityRange,
) -> Result<&'a Entity, FormatError> {
    entity_map
        .get(range.key)
        .ok_or(FormatError::UnknownEntity(range.key))
}

/// Marker written before the first character of an entity range.
pub fn entity_start_marker(entity: &Entity) -> &'static str {
    match entity.entity_type {
        EntityType::Link => "[",
        EntityType::Image => "",
    }
}

/// Marker written after the last character of an entity range.
pub fn entity_end_marker(entity: &Entity) -> String {
    match entity.entity_type {
        EntityType::Link => format!("]({})", entity.data.url.as_deref().unwrap_or_default()),
        EntityType::Image => String::new(),
    }
}

/// A style whose closing symbol has not been written yet.
#[derive(Debug, Clone)]
struct OpenStyle {
    /// `None` when the style has no symbol and is rendered as plain text.
    symbol: Option<String>,
    /// Index of the last character covered by the style.
    last: usize,
    /// Byte position in the output where the opening symbol begins.
    open_at: usize,
}

struct MarkupBuilder<'a> {
    options: &'a SerializeOptions,
    out: String,
    stack: Vec<OpenStyle>,
}

impl<'a> MarkupBuilder<'a> {
    fn new(options: &'a SerializeOptions) -> Self {
        MarkupBuilder {
            options,
            out: String::new(),
            stack: Vec::new(),
        }
    }

    fn open(&mut self, range: &StyleRange, last: usize) -> Result<(), FormatError> {
        let symbol = self.resolve_symbol(&range.style)?;
        let open_at = self.out.len();
        if let Some(symbol) = &symbol {
            self.out.push_str(symbol);
        }
        self.stack.push(OpenStyle {
            symbol,
            last,
            open_at,
        });
        Ok(())
    }

    fn resolve_symbol(&self, style: &str) -> Result<Option<String>, FormatError> {
        match self.options.styles.symbol(style) {
            Some(symbol) => Ok(Some(symbol.to_string())),
            None => match self.options.missing_symbol {
                MissingSymbolPolicy::Error => {
                    Err(FormatError::MissingStyleSymbol(style.to_string()))
                }
                MissingSymbolPolicy::Skip => {
                    tracing::warn!(style, "no Markdown symbol for style, emitting plain text");
                    Ok(None)
                }
            },
        }
    }

    fn close_ending_at(&mut self, index: usize) {
        while let Some(position) = self.stack.iter().rposition(|style| style.last == index) {
            let crossing = self.stack.split_off(position + 1);
            if !crossing.is_empty() {
                tracing::debug!(
                    index,
                    crossing = crossing.len(),
                    "style ranges cross, splitting the inner ones"
                );
            }

            for style in crossing.iter().rev() {
                self.close(style);
            }
            if let Some(style) = self.stack.pop() {
                self.close(&style);
            }
            for style in crossing {
                self.reopen(style);
            }
        }
    }

    fn close_remaining(&mut self) {
        while let Some(style) = self.stack.pop() {
            tracing::debug!(last = style.last, "closing style range that runs past the text");
            self.close(&style);
        }
    }

    fn reopen(&mut self, mut style: OpenStyle) {
        style.open_at = self.out.len();
        if let Some(symbol) = &style.symbol {
            self.out.push_str(symbol);
        }
        self.stack.push(style);
    }

    fn close(&mut self, style: &OpenStyle) {
        if let Some(symbol) = &style.symbol {
            self.out.push_str(symbol);
            fix_whitespace_inside_style(&mut self.out, style.open_at, symbol);
        }
    }
}

/// Move whitespace inside a just-closed span outside of its symbols.
///
/// `out[open_at..]` must be exactly `symbol + body + symbol`.
pub fn fix_whitespace_inside_style(out: &mut String, open_at: usize, symbol: &str) {
    let body_start = open_at + symbol.len();
    let body_end = out.len() - symbol.len();
    let body = &out[body_start..body_end];
    let trimmed = body.trim();
    if trimmed.len() == body.len() {
        return;
    }

    let rebuilt = if trimmed.is_empty() {
        tracing::debug!("dropping symbols around whitespace-only span");
        body.to_string()
    } else {
        let leading = body.len() - body.trim_start().len();
        let trailing = body.len() - body.trim_end().len();
        format!(
            "{}{symbol}{trimmed}{symbol}{}",
            &body[..leading],
            &body[body.len() - trailing..]
        )
    };

    out.truncate(open_at);
    out.push_str(&rebuilt);
}
