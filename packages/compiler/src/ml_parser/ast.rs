//! ML Parser AST
//!
//! The nested form of the token stream: elements and sections own their
//! children.

use super::tokens::Attribute;
use crate::parse_util::ParseSourceSpan;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    Element(Element),
    Text(Text),
    /// `{{ expr }}`, HTML escaped on output
    Interpolation(Interpolation),
    /// `{{{ expr }}}` or `{{& expr }}`, inserted as is
    TripleInterpolation(Interpolation),
    Section(Section),
    Partial(Partial),
    Comment(Comment),
    DocType(DocType),
}

impl Node {
    pub fn source_span(&self) -> &ParseSourceSpan {
        match self {
            Node::Element(n) => &n.source_span,
            Node::Text(n) => &n.source_span,
            Node::Interpolation(n) | Node::TripleInterpolation(n) => &n.source_span,
            Node::Section(n) => &n.source_span,
            Node::Partial(n) => &n.source_span,
            Node::Comment(n) => &n.source_span,
            Node::DocType(n) => &n.source_span,
        }
    }

    /// Child nodes of containers, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(n) => &n.children,
            Node::Section(n) => &n.children,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    /// `<name />` or a void element; no close tag follows
    pub self_closing: bool,
    /// From the start of the open tag to the end of the close tag
    pub source_span: ParseSourceSpan,
    pub start_source_span: ParseSourceSpan,
    pub end_source_span: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub value: String,
    pub source_span: ParseSourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpolation {
    pub expression: String,
    pub source_span: ParseSourceSpan,
}

/// `{{#expr}} ... {{/expr}}`, or `{{^expr}}` when inverted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub expression: String,
    pub inverted: bool,
    pub children: Vec<Node>,
    pub source_span: ParseSourceSpan,
    pub start_source_span: ParseSourceSpan,
    pub end_source_span: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Partial {
    pub name: String,
    pub source_span: ParseSourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub value: String,
    pub source_span: ParseSourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocType {
    pub value: String,
    pub source_span: ParseSourceSpan,
}
