//! Markdown format tests
//!
//! Tests for bidirectional Markdown ↔ rich-text conversion.

mod export;
mod import;
mod round_trip;
