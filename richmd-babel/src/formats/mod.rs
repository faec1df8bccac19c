//! Format implementations
//!
//! This module contains all format implementations that convert between
//! [`crate::model::RawDocument`] and text representations.

pub mod markdown;
pub mod raw;

pub use markdown::MarkdownFormat;
pub use raw::RawJsonFormat;
