//! ML Parser Tokens
//!
//! The flat, typed output of the tokenizer

use crate::parse_util::ParseSourceSpan;
use serde::{Deserialize, Serialize};

/// Token types for template parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TokenType {
    Text,
    Interpolation,
    TripleInterpolation,
    SectionOpen,
    InvertedSectionOpen,
    SectionClose,
    Partial,
    MustacheComment,
    TagOpen,
    TagClose,
    Comment,
    DocType,
}

impl TokenType {
    /// Upper snake case name, used in diagnostics and test fixtures
    pub fn humanize(self) -> &'static str {
        match self {
            TokenType::Text => "TEXT",
            TokenType::Interpolation => "INTERPOLATION",
            TokenType::TripleInterpolation => "TRIPLE_INTERPOLATION",
            TokenType::SectionOpen => "SECTION_OPEN",
            TokenType::InvertedSectionOpen => "INVERTED_SECTION_OPEN",
            TokenType::SectionClose => "SECTION_CLOSE",
            TokenType::Partial => "PARTIAL",
            TokenType::MustacheComment => "MUSTACHE_COMMENT",
            TokenType::TagOpen => "TAG_OPEN",
            TokenType::TagClose => "TAG_CLOSE",
            TokenType::Comment => "COMMENT",
            TokenType::DocType => "DOC_TYPE",
        }
    }
}

/// All token variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Token {
    Text(TextToken),
    Interpolation(MustacheToken),
    TripleInterpolation(MustacheToken),
    SectionOpen(MustacheToken),
    InvertedSectionOpen(MustacheToken),
    SectionClose(MustacheToken),
    Partial(MustacheToken),
    MustacheComment(MustacheToken),
    TagOpen(TagOpenToken),
    TagClose(TagCloseToken),
    Comment(CommentToken),
    DocType(DocTypeToken),
}

impl Token {
    pub fn token_type(&self) -> TokenType {
        match self {
            Token::Text(_) => TokenType::Text,
            Token::Interpolation(_) => TokenType::Interpolation,
            Token::TripleInterpolation(_) => TokenType::TripleInterpolation,
            Token::SectionOpen(_) => TokenType::SectionOpen,
            Token::InvertedSectionOpen(_) => TokenType::InvertedSectionOpen,
            Token::SectionClose(_) => TokenType::SectionClose,
            Token::Partial(_) => TokenType::Partial,
            Token::MustacheComment(_) => TokenType::MustacheComment,
            Token::TagOpen(_) => TokenType::TagOpen,
            Token::TagClose(_) => TokenType::TagClose,
            Token::Comment(_) => TokenType::Comment,
            Token::DocType(_) => TokenType::DocType,
        }
    }

    pub fn source_span(&self) -> &ParseSourceSpan {
        match self {
            Token::Text(t) => &t.source_span,
            Token::Interpolation(t)
            | Token::TripleInterpolation(t)
            | Token::SectionOpen(t)
            | Token::InvertedSectionOpen(t)
            | Token::SectionClose(t)
            | Token::Partial(t)
            | Token::MustacheComment(t) => &t.source_span,
            Token::TagOpen(t) => &t.source_span,
            Token::TagClose(t) => &t.source_span,
            Token::Comment(t) => &t.source_span,
            Token::DocType(t) => &t.source_span,
        }
    }

    /// The decoded payload: text, expression, tag name or comment body
    pub fn value(&self) -> &str {
        match self {
            Token::Text(t) => &t.value,
            Token::Interpolation(t)
            | Token::TripleInterpolation(t)
            | Token::SectionOpen(t)
            | Token::InvertedSectionOpen(t)
            | Token::SectionClose(t)
            | Token::Partial(t)
            | Token::MustacheComment(t) => &t.expression,
            Token::TagOpen(t) => &t.name,
            Token::TagClose(t) => &t.name,
            Token::Comment(t) => &t.value,
            Token::DocType(t) => &t.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextToken {
    pub value: String,
    pub source_span: ParseSourceSpan,
}

/// Any `{{ }}` / `{{{ }}}` form; the sigil (`#`, `/`, `>` ...) is not part of `expression`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MustacheToken {
    pub expression: String,
    pub source_span: ParseSourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    /// Entity-decoded value; `None` for a bare attribute like `disabled`
    pub value: Option<String>,
    pub source_span: ParseSourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagOpenToken {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub self_closing: bool,
    pub source_span: ParseSourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCloseToken {
    pub name: String,
    pub source_span: ParseSourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentToken {
    pub value: String,
    pub source_span: ParseSourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocTypeToken {
    pub value: String,
    pub source_span: ParseSourceSpan,
}
