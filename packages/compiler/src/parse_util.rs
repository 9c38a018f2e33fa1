//! Parse Utilities
//!
//! Source locations and spans attached to tokens, nodes and errors

use crate::chars;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the source: byte offset plus zero based line and column.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseLocation {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl ParseLocation {
    pub fn new(offset: usize, line: usize, col: usize) -> Self {
        ParseLocation { offset, line, col }
    }

    /// Location reached after reading `text` starting from this location
    pub fn advanced_over(&self, text: &str) -> ParseLocation {
        let mut line = self.line;
        let mut col = self.col;
        for ch in text.chars() {
            if ch == chars::NEWLINE {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        ParseLocation::new(self.offset + text.len(), line, col)
    }

    /// Return the source around the location
    /// Up to `max_chars` or `max_lines` on each side of the location
    pub fn get_context<'a>(
        &self,
        source: &'a str,
        max_chars: usize,
        max_lines: usize,
    ) -> (&'a str, &'a str) {
        let mut offset = self.offset.min(source.len());
        // a source other than the parsed one may not share its char boundaries
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let (head, tail) = source.split_at(offset);

        let mut start = head.len();
        let mut ctx_lines = 0;
        for (ctx_chars, (idx, ch)) in head.char_indices().rev().enumerate() {
            if ctx_chars >= max_chars {
                break;
            }
            if ch == chars::NEWLINE {
                ctx_lines += 1;
                if ctx_lines >= max_lines {
                    break;
                }
            }
            start = idx;
        }

        let mut end = 0;
        ctx_lines = 0;
        for (ctx_chars, (idx, ch)) in tail.char_indices().enumerate() {
            if ctx_chars >= max_chars {
                break;
            }
            if ch == chars::NEWLINE {
                ctx_lines += 1;
                if ctx_lines >= max_lines {
                    break;
                }
            }
            end = idx + ch.len_utf8();
        }

        (&head[start..], &tail[..end])
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSourceSpan {
    pub start: ParseLocation,
    pub end: ParseLocation,
}

impl ParseSourceSpan {
    pub fn new(start: ParseLocation, end: ParseLocation) -> Self {
        ParseSourceSpan { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The original source text covered by the span
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start.offset..self.end.offset]
    }
}
