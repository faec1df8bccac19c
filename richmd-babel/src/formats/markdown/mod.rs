//! Markdown format implementation
//!
//! Bidirectional conversion between the flat rich-text model and Markdown.
//!
//! # Library Choice
//!
//! Parsing goes through the `comrak` crate, wrapped behind the
//! [`ast::MarkdownParser`] trait so the flattener only ever sees the typed
//! [`ast::Node`] tree. Serialization is done by hand: the output must follow
//! the block model exactly (one line per block, fixed symbols), which a
//! general-purpose CommonMark renderer would normalize away.
//!
//! # Element Mapping Table
//!
//! | Block / style          | Markdown                  | Export Notes                       | Import Notes                         |
//! |------------------------|---------------------------|------------------------------------|--------------------------------------|
//! | unstyled               | Paragraph                 | Plain line                         | Default for unresolved nodes         |
//! | header-one..six        | `#` .. `######`           | Fixed prefix                       | Header depth → `Header<n>`           |
//! | unordered-list-item    | `- item`                  | Fixed prefix                       | Unordered List node                  |
//! | ordered-list-item      | `1. item`                 | Counter across the whole document  | Ordered List node                    |
//! | blockquote             | `> quote`                 | Fixed prefix                       | BlockQuote node                      |
//! | code-block             | fenced ```` ``` ````      | Fences on their own lines          | Fenced lines joined into one segment |
//! | atomic (image)         | `![fileName](url)`        | Placeholder text replaced          | Paragraph starting with an Image     |
//! | BOLD                   | `__bold__`                | Symbol from the style dictionary   | Strong node                          |
//! | ITALIC                 | `*italic*`                | Symbol from the style dictionary   | Emphasis node                        |
//! | LINK entity            | `[text](url)`             | Markers around the entity range    | Link node → MUTABLE entity           |
//! | IMAGE entity           | `![alt](url)`             | Only inside atomic blocks          | Image node → IMMUTABLE entity        |
//!
//! # Lossy Conversions
//!
//! - Nesting depth of lists is not modeled (`depth` is always 0)
//! - Code block info strings are dropped on import
//! - Inline code, raw HTML and unmapped inline nodes keep their text but lose their markup
//! - Styles split by a nested style come back as several adjacent ranges
//! - Intraword `BOLD` (`a__b__c`) is not emphasis in CommonMark and comes back unstyled

pub mod ast;
pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::model::RawDocument;
use crate::options::{DeserializeOptions, SerializeOptions};

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    pub serialize_options: SerializeOptions,
    pub deserialize_options: DeserializeOptions,
}

impl MarkdownFormat {
    pub fn new(serialize_options: SerializeOptions, deserialize_options: DeserializeOptions) -> Self {
        MarkdownFormat {
            serialize_options,
            deserialize_options,
        }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown, one line per block"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<RawDocument, FormatError> {
        parser::parse_from_markdown(source, &self.deserialize_options)
    }

    fn serialize(&self, doc: &RawDocument) -> Result<String, FormatError> {
        serializer::serialize_to_markdown(doc, &self.serialize_options)
    }
}
