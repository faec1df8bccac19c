//! Conversion between flat rich-text documents and Markdown
//!
//!     A rich-text editor stores a document as a flat list of blocks: plain text plus
//!     offset-based style ranges (BOLD over characters 4..8) and entity ranges (a link
//!     over characters 10..14). Markdown expresses the same things by nesting symbols
//!     around the text. This crate converts in both directions.
//!
//!     This is a pure lib: no I/O, no global state. Every conversion is a function of
//!     its input and options, so conversions can run concurrently without coordination.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── styles.rs               # Symbol dictionaries, block prefixes
//!     ├── options.rs              # Per-direction options
//!     ├── model                   # The flat document model (serde-ready)
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── ast.rs          # Typed Markdown tree + parser capability (comrak)
//!     │   │   ├── parser.rs       # Markdown → document
//!     │   │   ├── serializer.rs   # Document → Markdown
//!     │   │   └── mod.rs
//!     │   └── raw                 # The document as raw JSON
//!     ├── common                  # Flat <-> nested algorithms
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The hard part is the offset bookkeeping between the flat and the nested shape.
//!     Both directions live in ./common:
//!     - flat_to_nested.rs: walks block text with a stack of open styles, writing
//!       symbols at range boundaries and moving whitespace outside of the symbols.
//!     - nested_to_flat.rs: walks a Markdown tree, appending leaf text to a buffer and
//!       recording ranges at the buffer length.
//!     - segments.rs: one block per line, fenced code blocks joined into one.
//!
//! Testing
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod options;
pub mod registry;
pub mod styles;

pub mod common;

pub use error::FormatError;
pub use format::Format;
pub use formats::markdown::ast::{ComrakParser, MarkdownParser};
pub use model::{Block, BlockType, Entity, EntityMap, EntityRange, RawDocument, StyleRange};
pub use options::{DeserializeOptions, MissingSymbolPolicy, SerializeOptions};
pub use registry::FormatRegistry;

/// Converts a document to Markdown with the default style dictionary.
pub fn to_markdown(doc: &RawDocument) -> Result<String, FormatError> {
    to_markdown_with(doc, &SerializeOptions::default())
}

/// Converts a document to Markdown.
///
/// Extra style symbols are passed through [`SerializeOptions::with_style`].
pub fn to_markdown_with(doc: &RawDocument, options: &SerializeOptions) -> Result<String, FormatError> {
    formats::markdown::serializer::serialize_to_markdown(doc, options)
}

/// Converts Markdown to a document with the default style tables.
pub fn from_markdown(markdown: &str) -> Result<RawDocument, FormatError> {
    from_markdown_with(markdown, &DeserializeOptions::default())
}

/// Converts Markdown to a document.
pub fn from_markdown_with(
    markdown: &str,
    options: &DeserializeOptions,
) -> Result<RawDocument, FormatError> {
    formats::markdown::parser::parse_from_markdown(markdown, options)
}

/// Converts Markdown to a document using another Markdown parser.
pub fn from_markdown_with_parser(
    markdown: &str,
    options: &DeserializeOptions,
    parser: &dyn MarkdownParser,
) -> Result<RawDocument, FormatError> {
    formats::markdown::parser::parse_with_parser(markdown, options, parser)
}
