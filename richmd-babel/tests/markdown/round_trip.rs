//! Documents that survive a trip to Markdown and back.

use proptest::prelude::*;
use richmd_babel::{from_markdown, to_markdown, Block, BlockType, Entity, RawDocument, StyleRange};

const BLOCK_TYPES: &[BlockType] = &[
    BlockType::Unstyled,
    BlockType::HeaderOne,
    BlockType::HeaderTwo,
    BlockType::HeaderThree,
    BlockType::HeaderFour,
    BlockType::HeaderFive,
    BlockType::HeaderSix,
    BlockType::UnorderedListItem,
    BlockType::OrderedListItem,
    BlockType::Blockquote,
    BlockType::CodeBlock,
];

fn block_strategy() -> impl Strategy<Value = Block> {
    (
        prop::sample::select(BLOCK_TYPES),
        prop::collection::vec("[a-z]{1,8}", 1..=4),
        prop::option::of((any::<prop::sample::Index>(), prop::bool::ANY)),
    )
        .prop_map(|(block_type, words, style)| {
            let text = words.join(" ");
            let mut block = Block::new(block_type, text);
            if let (Some((index, bold)), false) = (style, block_type == BlockType::CodeBlock) {
                let word = index.index(words.len());
                let offset: usize = words[..word].iter().map(|w| w.len() + 1).sum();
                let name = if bold { "BOLD" } else { "ITALIC" };
                block = block.with_style(offset, words[word].len(), name);
            }
            block
        })
}

proptest! {
    #[test]
    fn test_blocks_round_trip(blocks in prop::collection::vec(block_strategy(), 1..6)) {
        let doc = RawDocument { blocks, ..RawDocument::default() };
        let md = to_markdown(&doc).unwrap();
        let back = from_markdown(&md).unwrap();

        prop_assert_eq!(back.blocks.len(), doc.blocks.len());
        for (original, parsed) in doc.blocks.iter().zip(&back.blocks) {
            prop_assert_eq!(&parsed.text, &original.text);
            prop_assert_eq!(parsed.block_type, original.block_type);
            if original.block_type != BlockType::CodeBlock {
                prop_assert_eq!(&parsed.inline_style_ranges, &original.inline_style_ranges);
            }
        }
    }
}

#[test]
fn test_link_round_trip() {
    let md = "see [here](http://x)";
    let doc = from_markdown(md).unwrap();
    assert_eq!(to_markdown(&doc).unwrap(), md);
}

#[test]
fn test_image_round_trip() {
    let doc = RawDocument {
        blocks: vec![Block::new(BlockType::Atomic, " ").with_entity(0, 0, 1)],
        entity_map: [(0, Entity::image("cat.png", "a cat"))].into_iter().collect(),
    };

    let md = to_markdown(&doc).unwrap();
    assert_eq!(md, "![a cat](cat.png)");

    let back = from_markdown(&md).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_styled_header_round_trip() {
    let md = "## make __this__ *count*";
    let doc = from_markdown(md).unwrap();
    assert_eq!(
        doc.blocks[0].inline_style_ranges,
        vec![StyleRange::new(5, 4, "BOLD"), StyleRange::new(10, 5, "ITALIC")]
    );
    assert_eq!(to_markdown(&doc).unwrap(), md);
}

#[test]
fn test_intraword_bold_does_not_survive() {
    let doc = RawDocument {
        blocks: vec![Block::new(BlockType::Unstyled, "abc").with_style(1, 1, "BOLD")],
        ..RawDocument::default()
    };
    let md = to_markdown(&doc).unwrap();
    assert_eq!(md, "a__b__c");

    let back = from_markdown(&md).unwrap();
    assert_eq!(back.blocks[0].text, "a__b__c");
    assert!(back.blocks[0].inline_style_ranges.is_empty());
}
