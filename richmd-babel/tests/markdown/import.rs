//! Import tests for Markdown format (Markdown → rich text)

use insta::assert_snapshot;
use richmd_babel::format::Format;
use richmd_babel::formats::markdown::MarkdownFormat;
use richmd_babel::formats::raw::RawJsonFormat;
use richmd_babel::model::{EntityRange, EntityType, Mutability};
use richmd_babel::{from_markdown, from_markdown_with, BlockType, DeserializeOptions, StyleRange};

#[test]
fn test_kitchensink_import() {
    let md = "# Title\nSome __bold__ text\n- [link](http://a.b)\n![pic](p.png)";
    let doc = MarkdownFormat::default().parse(md).unwrap();
    let json = RawJsonFormat::pretty().serialize(&doc).unwrap();

    assert_snapshot!(json, @r#"
    {
      "blocks": [
        {
          "text": "Title",
          "type": "header-one",
          "depth": 0,
          "inlineStyleRanges": [],
          "entityRanges": []
        },
        {
          "text": "Some bold text",
          "type": "unstyled",
          "depth": 0,
          "inlineStyleRanges": [
            {
              "offset": 5,
              "length": 4,
              "style": "BOLD"
            }
          ],
          "entityRanges": []
        },
        {
          "text": "link",
          "type": "unordered-list-item",
          "depth": 0,
          "inlineStyleRanges": [],
          "entityRanges": [
            {
              "key": 0,
              "offset": 0,
              "length": 4
            }
          ]
        },
        {
          "text": " ",
          "type": "atomic",
          "depth": 0,
          "inlineStyleRanges": [],
          "entityRanges": [
            {
              "key": 1,
              "offset": 0,
              "length": 1
            }
          ]
        }
      ],
      "entityMap": {
        "0": {
          "type": "LINK",
          "mutability": "MUTABLE",
          "data": {
            "url": "http://a.b"
          }
        },
        "1": {
          "type": "IMAGE",
          "mutability": "IMMUTABLE",
          "data": {
            "url": "p.png",
            "src": "p.png",
            "fileName": "pic"
          }
        }
      }
    }
    "#);
}

#[test]
fn test_fenced_code_spanning_lines_is_one_block() {
    let md = "```\nfirst line\nsecond line\nthird line\n```\nA plain paragraph.";
    let doc = from_markdown(md).unwrap();

    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(doc.blocks[0].block_type, BlockType::CodeBlock);
    assert_eq!(doc.blocks[0].text, "first line\nsecond line\nthird line");
    assert_eq!(doc.blocks[1].block_type, BlockType::Unstyled);
    assert_eq!(doc.blocks[1].text, "A plain paragraph.");
}

#[test]
fn test_link_offsets() {
    let doc = from_markdown("see [here](http://x)").unwrap();
    let block = &doc.blocks[0];

    assert_eq!(block.text, "see here");
    assert_eq!(
        block.entity_ranges,
        vec![EntityRange {
            key: 0,
            offset: 4,
            length: 4
        }]
    );
    let entity = doc.entity_map.get(0).unwrap();
    assert_eq!(entity.entity_type, EntityType::Link);
    assert_eq!(entity.mutability, Mutability::Mutable);
    assert_eq!(entity.data.url.as_deref(), Some("http://x"));
}

#[test]
fn test_styled_link_text() {
    let doc = from_markdown("[__bold__ link](u)").unwrap();
    let block = &doc.blocks[0];

    assert_eq!(block.text, "bold link");
    assert_eq!(block.entity_ranges[0].length, 9);
    assert_eq!(block.inline_style_ranges, vec![StyleRange::new(0, 4, "BOLD")]);
}

#[test]
fn test_empty_entity_map_placeholder() {
    let doc = from_markdown("just text\n# and a header").unwrap();
    assert!(doc.entity_map.is_placeholder());

    let json = RawJsonFormat::default().serialize(&doc).unwrap();
    assert!(json.ends_with(r#""entityMap":{"data":"","mutability":"","type":""}}"#));
}

#[test]
fn test_placeholder_flag_off() {
    let options = DeserializeOptions::default().with_entity_map_placeholder(false);
    let doc = from_markdown_with("just text", &options).unwrap();
    let json = RawJsonFormat::default().serialize(&doc).unwrap();
    assert!(json.ends_with(r#""entityMap":{}}"#));
}

#[test]
fn test_multibyte_offsets_count_chars() {
    let doc = from_markdown("naïve *café* ☕").unwrap();
    let block = &doc.blocks[0];
    assert_eq!(block.text, "naïve café ☕");
    assert_eq!(block.inline_style_ranges, vec![StyleRange::new(6, 4, "ITALIC")]);
}

#[test]
fn test_inline_code_and_html_keep_their_text() {
    let doc = from_markdown("call `run()` now <b>x</b>").unwrap();
    assert_eq!(doc.blocks[0].text, "call run() now <b>x</b>");
}

#[test]
fn test_conversions_run_concurrently() {
    let inputs = ["# one [a](1)", "- two __b__", "1. three *c*", "> four"];
    let docs: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|md| scope.spawn(move || from_markdown(md).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (doc, md) in docs.iter().zip(inputs) {
        assert_eq!(doc, &from_markdown(md).unwrap());
    }
    assert_eq!(docs[0].entity_map.len(), 1);
}
