//! Error types for format operations

use crate::model::EntityKey;
use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error reported by the Markdown parser or while reading a document
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// A style range names a style with no Markdown symbol configured
    #[error("No Markdown symbol configured for style '{0}'")]
    MissingStyleSymbol(String),
    /// An entity range points at a key absent from the entity map
    #[error("Entity {0} is not present in the entity map")]
    UnknownEntity(EntityKey),
    /// An atomic block carries no image entity to render
    #[error("Atomic block {block} has no image entity")]
    MissingImageEntity { block: usize },
    /// Raw JSON could not be read or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
