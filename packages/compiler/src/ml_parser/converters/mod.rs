//! Converters
//!
//! Each converter tries to read one token at the cursor. They are tried in a
//! fixed order and the first one that produces a token wins; text comes last
//! because it takes everything the structural converters leave behind.

mod comment;
mod mustache;
mod tag;
mod text;

pub use comment::{CommentConverter, DocTypeConverter};
pub use mustache::MustacheConverter;
pub use tag::{CloseTagConverter, OpenTagConverter};
pub use text::TextConverter;

use super::context::Context;
use super::cursor::Cursor;
use super::tokens::Token;
use crate::chars;
use crate::config::ParseOptions;
use crate::error::Result;

/// A token together with how many bytes of input it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub token: Token,
    pub consumed: usize,
}

pub trait Converter: Send + Sync {
    /// Short name for log output
    fn name(&self) -> &'static str;

    /// Read one token at the cursor.
    ///
    /// `Ok(None)` means "not mine, try the next converter". An error means the
    /// input starts like this converter's token but is malformed.
    fn attempt(
        &self,
        cursor: &Cursor<'_>,
        context: &Context<'_>,
        options: &ParseOptions,
    ) -> Result<Option<Converted>>;
}

/// The ordered converter list the tokenizer walks at every position
pub struct ConverterSet {
    converters: Vec<Box<dyn Converter>>,
}

impl ConverterSet {
    pub fn empty() -> Self {
        ConverterSet {
            converters: Vec::new(),
        }
    }

    /// Comment, doctype, close tag, open tag, mustache, text
    pub fn standard() -> Self {
        ConverterSet::empty()
            .with(CommentConverter)
            .with(DocTypeConverter)
            .with(CloseTagConverter)
            .with(OpenTagConverter)
            .with(MustacheConverter)
            .with(TextConverter)
    }

    /// Append a converter with the lowest priority so far
    pub fn with(mut self, converter: impl Converter + 'static) -> Self {
        self.converters.push(Box::new(converter));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Converter> {
        self.converters.iter().map(|converter| converter.as_ref())
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl Default for ConverterSet {
    fn default() -> Self {
        ConverterSet::standard()
    }
}

/// Byte-level reader over the remaining input, shared by the tag converters
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, pos: usize) -> Self {
        Scanner { input, pos }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        let len = self
            .rest()
            .find(|ch: char| !predicate(ch))
            .unwrap_or(self.rest().len());
        self.pos += len;
        &self.input[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(chars::is_whitespace);
    }
}
