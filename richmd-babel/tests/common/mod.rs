//! Tests for the flat <-> nested conversions working against each other.

use richmd_babel::common::flat_to_nested::render_inline;
use richmd_babel::common::nested_to_flat::{flatten_nodes, EntityRegistry};
use richmd_babel::formats::markdown::ast::{ComrakParser, MarkdownParser};
use richmd_babel::styles::InlineStyleTable;
use richmd_babel::{Block, BlockType, SerializeOptions, StyleRange};

fn flatten(md: &str) -> (Block, richmd_babel::EntityMap) {
    let root = ComrakParser::default().parse(md).expect("comrak never fails");
    let mut entities = EntityRegistry::new();
    let block = flatten_nodes(&root.children, &InlineStyleTable::default(), &mut entities);
    (block, entities.into_map())
}

#[test]
fn test_nested_to_flat_to_nested() {
    let md = "plain __bold *both*__ [*link*](http://x) end";
    let (block, entities) = flatten(md);

    assert_eq!(block.text, "plain bold both link end");
    assert_eq!(
        block.inline_style_ranges,
        vec![
            StyleRange::new(6, 5, "BOLD"),
            StyleRange::new(11, 4, "BOLD"),
            StyleRange::new(11, 4, "ITALIC"),
            StyleRange::new(16, 4, "ITALIC"),
        ]
    );

    let rendered = render_inline(&block, &entities, &SerializeOptions::default()).unwrap();
    // Styles open before the link marker and close after it.
    assert_eq!(rendered, "plain __bold__ __*both*__ *[link](http://x)* end");
}

#[test]
fn test_flat_to_nested_to_flat() {
    let block = Block::new(BlockType::Unstyled, "one two three")
        .with_style(0, 13, "ITALIC")
        .with_style(4, 3, "BOLD");
    let rendered =
        render_inline(&block, &Default::default(), &SerializeOptions::default()).unwrap();
    assert_eq!(rendered, "*one __two__ three*");

    let (reparsed, _) = flatten(&rendered);
    assert_eq!(reparsed.text, block.text);
    // The outer style comes back split around the nested one.
    assert_eq!(
        reparsed.inline_style_ranges,
        vec![
            StyleRange::new(0, 4, "ITALIC"),
            StyleRange::new(4, 3, "ITALIC"),
            StyleRange::new(4, 3, "BOLD"),
            StyleRange::new(7, 6, "ITALIC"),
        ]
    );
}
