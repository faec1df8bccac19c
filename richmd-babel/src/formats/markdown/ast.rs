//! Typed Markdown syntax tree and the parser capability that produces it.
//!
//! The block flattener never looks at Markdown source itself. It asks a
//! [`MarkdownParser`] for a [`Root`] and walks the tree. [`ComrakParser`] is
//! the default implementation; any other parser can be injected as long as it
//! produces the same node vocabulary.

use crate::error::FormatError;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Top-level node of a parsed segment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root {
    pub children: Vec<Node>,
}

/// A Markdown node. Containers carry their children, leaves carry their text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Paragraph(Vec<Node>),
    List { ordered: bool, children: Vec<Node> },
    ListItem(Vec<Node>),
    Header { depth: u8, children: Vec<Node> },
    BlockQuote(Vec<Node>),
    Strong(Vec<Node>),
    Emphasis(Vec<Node>),
    Delete(Vec<Node>),
    Link { url: String, children: Vec<Node> },
    CodeBlock { value: String },
    Code { value: String },
    Html { value: String },
    Image { url: String, alt: String },
    Text { value: String },
    Break,
    HorizontalRule,
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Node type name, used as the key into the style tables.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Paragraph(_) => "Paragraph",
            Node::List { .. } => "List",
            Node::ListItem(_) => "ListItem",
            Node::Header { .. } => "Header",
            Node::BlockQuote(_) => "BlockQuote",
            Node::Strong(_) => "Strong",
            Node::Emphasis(_) => "Emphasis",
            Node::Delete(_) => "Delete",
            Node::Link { .. } => "Link",
            Node::CodeBlock { .. } => "CodeBlock",
            Node::Code { .. } => "Code",
            Node::Html { .. } => "Html",
            Node::Image { .. } => "Image",
            Node::Text { .. } => "Text",
            Node::Break => "Break",
            Node::HorizontalRule => "HorizontalRule",
        }
    }

    /// Children of a container node, `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Paragraph(children)
            | Node::ListItem(children)
            | Node::BlockQuote(children)
            | Node::Strong(children)
            | Node::Emphasis(children)
            | Node::Delete(children)
            | Node::List { children, .. }
            | Node::Header { children, .. }
            | Node::Link { children, .. } => Some(children),
            Node::CodeBlock { .. }
            | Node::Code { .. }
            | Node::Html { .. }
            | Node::Image { .. }
            | Node::Text { .. }
            | Node::Break
            | Node::HorizontalRule => None,
        }
    }

    /// Text a leaf contributes to the flat block text, `None` for containers.
    ///
    /// Images contribute a single space that stands in for the picture.
    pub fn leaf_text(&self) -> Option<&str> {
        match self {
            Node::CodeBlock { value }
            | Node::Code { value }
            | Node::Html { value }
            | Node::Text { value } => Some(value),
            Node::Image { .. } | Node::Break => Some(" "),
            Node::HorizontalRule => Some(""),
            _ => None,
        }
    }

    /// Number of `char`s this node contributes to the flat text.
    pub fn rendered_len(&self) -> usize {
        match self.children() {
            Some(children) => rendered_len_of(children),
            None => self.leaf_text().map_or(0, |text| text.chars().count()),
        }
    }
}

pub fn rendered_len_of(nodes: &[Node]) -> usize {
    nodes.iter().map(Node::rendered_len).sum()
}

/// Capability turning one Markdown segment into a [`Root`].
///
/// Errors are passed through to the caller untouched.
pub trait MarkdownParser {
    fn parse(&self, segment: &str) -> Result<Root, FormatError>;
}

/// [`MarkdownParser`] backed by the `comrak` CommonMark parser.
pub struct ComrakParser {
    options: ComrakOptions<'static>,
}

impl Default for ComrakParser {
    fn default() -> Self {
        let mut options = ComrakOptions::default();
        options.extension.strikethrough = true;
        ComrakParser { options }
    }
}

impl ComrakParser {
    pub fn with_options(options: ComrakOptions<'static>) -> Self {
        ComrakParser { options }
    }
}

impl MarkdownParser for ComrakParser {
    fn parse(&self, segment: &str) -> Result<Root, FormatError> {
        let arena = Arena::new();
        let document = parse_document(&arena, segment, &self.options);
        Ok(Root {
            children: convert_children(document),
        })
    }
}

fn convert_children<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    node.children().filter_map(convert_node).collect()
}

/// Convert a Comrak node, dropping node kinds outside the vocabulary.
fn convert_node<'a>(node: &'a AstNode<'a>) -> Option<Node> {
    let node_data = node.data.borrow();

    let converted = match &node_data.value {
        NodeValue::Paragraph => Node::Paragraph(convert_children(node)),
        NodeValue::List(list) => Node::List {
            ordered: matches!(list.list_type, ListType::Ordered),
            children: convert_children(node),
        },
        NodeValue::Item(_) => Node::ListItem(convert_children(node)),
        NodeValue::Heading(heading) => Node::Header {
            depth: heading.level,
            children: convert_children(node),
        },
        NodeValue::BlockQuote => Node::BlockQuote(convert_children(node)),
        NodeValue::Strong => Node::Strong(convert_children(node)),
        NodeValue::Emph => Node::Emphasis(convert_children(node)),
        NodeValue::Strikethrough => Node::Delete(convert_children(node)),
        NodeValue::Link(link) => Node::Link {
            url: link.url.clone(),
            children: convert_children(node),
        },
        NodeValue::Image(link) => Node::Image {
            url: link.url.clone(),
            alt: collect_text_from_children(node),
        },
        NodeValue::CodeBlock(code_block) => Node::CodeBlock {
            value: code_block
                .literal
                .strip_suffix('\n')
                .unwrap_or(&code_block.literal)
                .to_string(),
        },
        NodeValue::Code(code) => Node::Code {
            value: code.literal.clone(),
        },
        NodeValue::HtmlInline(html) => Node::Html {
            value: html.clone(),
        },
        NodeValue::HtmlBlock(html) => Node::Html {
            value: html.literal.trim_end_matches('\n').to_string(),
        },
        NodeValue::Text(text) => Node::text(text.clone()),
        NodeValue::SoftBreak | NodeValue::LineBreak => Node::Break,
        NodeValue::ThematicBreak => Node::HorizontalRule,
        other => {
            tracing::debug!(node = ?other, "skipping unsupported Markdown node");
            return None;
        }
    };

    Some(converted)
}

/// Collect the plain text under a node (image alt text).
fn collect_text_from_children<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.children() {
        collect_text_content(child, &mut text);
    }
    text
}

fn collect_text_content<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text_content(child, output);
            }
        }
    }
}
