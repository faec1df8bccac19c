//! The flat rich-text document model.
//!
//! A document is an ordered list of blocks, each holding plain text plus
//! offset-based style and entity annotations, and one entity map shared by all
//! blocks. Field names follow the editor's raw JSON interchange shape so the
//! types can be persisted and exchanged with serde as-is.

pub mod entity_map;
pub mod nodes;

pub use entity_map::EntityMap;
pub use nodes::*;
