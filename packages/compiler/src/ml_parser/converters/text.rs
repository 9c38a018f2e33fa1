//! Text Converter
//!
//! Everything up to the next barrier or mustache opener becomes one text
//! token, with character references decoded and whitespace runs collapsed.

use super::{Converted, Converter};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::ml_parser::barrier::lowest_index;
use crate::ml_parser::context::Context;
use crate::ml_parser::cursor::Cursor;
use crate::ml_parser::entities::decode_character_references;
use crate::ml_parser::html_whitespaces::collapse_whitespace;
use crate::ml_parser::tokens::{TextToken, Token};
use smallvec::SmallVec;
use std::borrow::Cow;

pub struct TextConverter;

impl TextConverter {
    /// Length of the text run at the start of `remaining`
    pub fn run_length(remaining: &str, context: &Context<'_>, options: &ParseOptions) -> usize {
        let barrier: Cow<'_, str> = match context.inside {
            Some(tag_name) => Cow::Owned(format!("</{}", tag_name)),
            None => Cow::Borrowed("<"),
        };

        let index = if context.interpolate {
            let markers: SmallVec<[&str; 3]> = SmallVec::from_buf([
                barrier.as_ref(),
                options.delimiters.start.as_str(),
                options.triple_delimiters.start.as_str(),
            ]);
            lowest_index(remaining, &markers)
        } else {
            remaining.find(barrier.as_ref())
        };

        index.unwrap_or(remaining.len())
    }
}

impl Converter for TextConverter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn attempt(
        &self,
        cursor: &Cursor<'_>,
        context: &Context<'_>,
        options: &ParseOptions,
    ) -> Result<Option<Converted>> {
        let remaining = cursor.remaining();
        let index = TextConverter::run_length(remaining, context, options);

        // a zero-length run is not a token; whatever starts here belongs to
        // another converter
        if index == 0 {
            return Ok(None);
        }

        let decoded = decode_character_references(&remaining[..index]);
        let value = if options.preserve_whitespace {
            decoded.into_owned()
        } else {
            collapse_whitespace(&decoded).into_owned()
        };

        Ok(Some(Converted {
            token: Token::Text(TextToken {
                value,
                source_span: cursor.span(index),
            }),
            consumed: index,
        }))
    }
}
