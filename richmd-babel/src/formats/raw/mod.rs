//! Raw JSON format
//!
//! The editor persists documents as JSON (`{"blocks": [...], "entityMap": {...}}`).
//! This format reads and writes that shape directly through serde, which makes it
//! the natural counterpart to Markdown when converting through the registry.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::RawDocument;

#[derive(Debug, Clone, Default)]
pub struct RawJsonFormat {
    /// Emit indented JSON.
    pub pretty: bool,
}

impl RawJsonFormat {
    pub fn pretty() -> Self {
        RawJsonFormat { pretty: true }
    }
}

impl Format for RawJsonFormat {
    fn name(&self) -> &str {
        "raw-json"
    }

    fn description(&self) -> &str {
        "Raw rich-text document as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<RawDocument, FormatError> {
        Ok(serde_json::from_str(source)?)
    }

    fn serialize(&self, doc: &RawDocument) -> Result<String, FormatError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(doc)?
        } else {
            serde_json::to_string(doc)?
        };
        Ok(json)
    }
}
