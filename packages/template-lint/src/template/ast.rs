//! Template AST node definitions.
//!
//! Nodes are immutable snapshots supplied by the host parser. An element's
//! sibling list is the surrounding `Node` slice; text and comment entries in
//! that slice do not count when looking for "the preceding element".

use crate::parse_util::ParseSourceSpan;

use super::directives::DirectiveKey;

/// Node type union
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(Text),
    Comment(Comment),
}

impl Node {
    pub fn source_span(&self) -> &ParseSourceSpan {
        match self {
            Node::Element(element) => &element.source_span,
            Node::Text(text) => &text.source_span,
            Node::Comment(comment) => &comment.source_span,
        }
    }
}

/// Element node
#[derive(Debug, Clone)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
    pub is_self_closing: bool,
    pub source_span: ParseSourceSpan,
    pub start_source_span: ParseSourceSpan,
    pub end_source_span: Option<ParseSourceSpan>,
}

/// Text node
#[derive(Debug, Clone)]
pub struct Text {
    pub value: String,
    pub source_span: ParseSourceSpan,
}

impl Text {
    pub fn new(value: String, source_span: ParseSourceSpan) -> Self {
        Text { value, source_span }
    }
}

/// Comment node
#[derive(Debug, Clone)]
pub struct Comment {
    pub value: Option<String>,
    pub source_span: ParseSourceSpan,
}

impl Comment {
    pub fn new(value: Option<String>, source_span: ParseSourceSpan) -> Self {
        Comment { value, source_span }
    }
}

/// Attribute node
///
/// `value` is `None` when the attribute is written without `="..."`. The
/// directive key is decomposed once here; check sites dispatch on its kind
/// tag instead of re-comparing name strings.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
    pub directive: Option<DirectiveKey>,
    pub source_span: ParseSourceSpan,
    pub key_span: Option<ParseSourceSpan>,
    pub value_span: Option<ParseSourceSpan>,
}

impl Attribute {
    pub fn new(
        name: String,
        value: Option<String>,
        source_span: ParseSourceSpan,
        key_span: Option<ParseSourceSpan>,
        value_span: Option<ParseSourceSpan>,
    ) -> Self {
        let directive = DirectiveKey::parse(&name);
        Attribute {
            name,
            value,
            directive,
            source_span,
            key_span,
            value_span,
        }
    }
}
