//! Contains logic for mapping between the flat block model and nested Markdown.

pub mod flat_to_nested;
pub mod nested_to_flat;
pub mod segments;
