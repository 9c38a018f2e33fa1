//! Position Cursor
//!
//! Scan state over the immutable source. Converters only read it; the
//! tokenizer advances it by what a converter reports consuming.

use crate::parse_util::{ParseLocation, ParseSourceSpan};

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    location: ParseLocation,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            location: ParseLocation::default(),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Unconsumed suffix of the source
    pub fn remaining(&self) -> &'a str {
        &self.source[self.location.offset..]
    }

    pub fn offset(&self) -> usize {
        self.location.offset
    }

    pub fn location(&self) -> ParseLocation {
        self.location
    }

    pub fn is_at_end(&self) -> bool {
        self.location.offset == self.source.len()
    }

    /// Location `len` bytes past the cursor, without moving
    pub fn location_at(&self, len: usize) -> ParseLocation {
        self.location.advanced_over(&self.remaining()[..len])
    }

    /// Span of the next `len` bytes
    pub fn span(&self, len: usize) -> ParseSourceSpan {
        self.span_within(0, len)
    }

    /// Span of `remaining()[start..end]`
    pub fn span_within(&self, start: usize, end: usize) -> ParseSourceSpan {
        let start_location = self.location_at(start);
        let end_location = start_location.advanced_over(&self.remaining()[start..end]);
        ParseSourceSpan::new(start_location, end_location)
    }

    /// Consume `n` bytes.
    ///
    /// # Panics
    ///
    /// When `n` runs past the end of the source or splits a character. A
    /// converter reporting such a length is a bug, not bad input.
    pub fn advance(&mut self, n: usize) {
        let remaining = self.remaining();
        assert!(
            n <= remaining.len(),
            "cursor advanced by {} with only {} bytes remaining",
            n,
            remaining.len()
        );
        assert!(
            remaining.is_char_boundary(n),
            "cursor advanced into the middle of a character"
        );
        self.location = self.location.advanced_over(&remaining[..n]);
    }
}
