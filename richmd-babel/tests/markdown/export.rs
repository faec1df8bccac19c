//! Export tests for Markdown format (rich text → Markdown)

use insta::assert_snapshot;
use richmd_babel::format::Format;
use richmd_babel::formats::markdown::MarkdownFormat;
use richmd_babel::{to_markdown, to_markdown_with, Block, BlockType, Entity, RawDocument};
use richmd_babel::{FormatError, MissingSymbolPolicy, SerializeOptions};

fn doc(blocks: Vec<Block>) -> RawDocument {
    RawDocument {
        blocks,
        ..RawDocument::default()
    }
}

#[test]
fn test_kitchensink_export() {
    let document = RawDocument {
        blocks: vec![
            Block::new(BlockType::HeaderOne, "Title"),
            Block::new(BlockType::Unstyled, "Some bold and italic text")
                .with_style(5, 4, "BOLD")
                .with_style(14, 6, "ITALIC"),
            Block::new(BlockType::OrderedListItem, "first"),
            Block::new(BlockType::OrderedListItem, "second"),
            Block::new(BlockType::UnorderedListItem, "a link").with_entity(0, 2, 4),
            Block::new(BlockType::CodeBlock, "let x = 1;\nlet y = 2;"),
            Block::new(BlockType::Blockquote, "quoted"),
            Block::new(BlockType::Atomic, " ").with_entity(1, 0, 1),
        ],
        entity_map: [
            (0, Entity::link("https://example.com")),
            (1, Entity::image("d.png", "diagram")),
        ]
        .into_iter()
        .collect(),
    };

    let md = MarkdownFormat::default().serialize(&document).unwrap();
    assert_snapshot!(md, @r"
    # Title
    Some __bold__ and *italic* text
    1. first
    2. second
    - a [link](https://example.com)
    ```
    let x = 1;
    let y = 2;
    ```
    > quoted
    ![diagram](d.png)
    ");
}

#[test]
fn test_whitespace_inside_bold_moves_out() {
    let md = to_markdown(&doc(vec![
        Block::new(BlockType::Unstyled, "  hi  ").with_style(0, 6, "BOLD")
    ]))
    .unwrap();
    assert_eq!(md, "  __hi__  ");
}

#[test]
fn test_trailing_space_in_styled_word() {
    let md = to_markdown(&doc(vec![
        Block::new(BlockType::Unstyled, "make this bold please").with_style(5, 5, "BOLD")
    ]))
    .unwrap();
    assert_eq!(md, "make __this__ bold please");
}

#[test]
fn test_stacked_styles_keep_listed_order() {
    let bold_first = to_markdown(&doc(vec![Block::new(BlockType::Unstyled, "x")
        .with_style(0, 1, "BOLD")
        .with_style(0, 1, "ITALIC")]))
    .unwrap();
    let italic_first = to_markdown(&doc(vec![Block::new(BlockType::Unstyled, "x")
        .with_style(0, 1, "ITALIC")
        .with_style(0, 1, "BOLD")]))
    .unwrap();

    assert_eq!(bold_first, "__*x*__");
    assert_eq!(italic_first, "*__x__*");
}

#[test]
fn test_stacked_styles_with_different_ends_close_lifo() {
    let md = to_markdown(&doc(vec![Block::new(BlockType::Unstyled, "abc def")
        .with_style(0, 7, "BOLD")
        .with_style(0, 3, "ITALIC")]))
    .unwrap();
    assert_eq!(md, "__*abc* def__");
}

#[test]
fn test_ordered_numbering_spans_other_blocks() {
    let md = to_markdown(&doc(vec![
        Block::new(BlockType::OrderedListItem, "one"),
        Block::new(BlockType::Unstyled, "between"),
        Block::new(BlockType::OrderedListItem, "two"),
        Block::new(BlockType::OrderedListItem, "three"),
    ]))
    .unwrap();
    assert_eq!(md, "1. one\nbetween\n2. two\n3. three");
}

#[test]
fn test_styles_in_later_blocks_use_block_offsets() {
    let md = to_markdown(&doc(vec![
        Block::new(BlockType::Unstyled, "first styled").with_style(6, 6, "BOLD"),
        Block::new(BlockType::HeaderTwo, "second styled").with_style(7, 6, "ITALIC"),
    ]))
    .unwrap();
    assert_eq!(md, "first __styled__\n## second *styled*");
}

#[test]
fn test_custom_symbols() {
    let options = SerializeOptions::default()
        .with_style("BOLD", "**")
        .with_style("CODE", "`");
    let md = to_markdown_with(
        &doc(vec![Block::new(BlockType::Unstyled, "run cargo now")
            .with_style(0, 3, "BOLD")
            .with_style(4, 5, "CODE")]),
        &options,
    )
    .unwrap();
    assert_eq!(md, "**run** `cargo` now");
}

#[test]
fn test_unknown_style_policy() {
    let document = doc(vec![
        Block::new(BlockType::Unstyled, "under").with_style(0, 5, "UNDERLINE")
    ]);

    let err = to_markdown(&document).unwrap_err();
    assert!(matches!(err, FormatError::MissingStyleSymbol(_)));

    let options = SerializeOptions::default().with_missing_symbol(MissingSymbolPolicy::Skip);
    assert_eq!(to_markdown_with(&document, &options).unwrap(), "under");
}

#[test]
fn test_conversions_are_stable() {
    let document = doc(vec![
        Block::new(BlockType::Unstyled, "same input").with_style(0, 4, "ITALIC")
    ]);
    assert_eq!(to_markdown(&document).unwrap(), to_markdown(&document).unwrap());
}
