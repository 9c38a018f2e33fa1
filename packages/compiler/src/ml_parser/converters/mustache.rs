//! Mustache Converter
//!
//! Reads `{{ ... }}` and `{{{ ... }}}` (or whatever the options configure) and
//! classifies plain mustaches by their leading sigil.

use super::{Converted, Converter};
use crate::chars;
use crate::config::ParseOptions;
use crate::error::{ParseError, Result};
use crate::ml_parser::context::Context;
use crate::ml_parser::cursor::Cursor;
use crate::ml_parser::defaults::InterpolationConfig;
use crate::ml_parser::tokens::{MustacheToken, Token};
use crate::parse_util::ParseSourceSpan;

pub struct MustacheConverter;

impl MustacheConverter {
    /// Openers to try, longest first; the triple form wins a tie
    fn candidates(options: &ParseOptions) -> [(&InterpolationConfig, bool); 2] {
        let plain = &options.delimiters;
        let triple = &options.triple_delimiters;
        if plain.start.len() > triple.start.len() {
            [(plain, false), (triple, true)]
        } else {
            [(triple, true), (plain, false)]
        }
    }
}

impl Converter for MustacheConverter {
    fn name(&self) -> &'static str {
        "mustache"
    }

    fn attempt(
        &self,
        cursor: &Cursor<'_>,
        context: &Context<'_>,
        options: &ParseOptions,
    ) -> Result<Option<Converted>> {
        if !context.interpolate {
            return Ok(None);
        }

        let remaining = cursor.remaining();
        for (config, triple) in MustacheConverter::candidates(options) {
            let Some(after_open) = remaining.strip_prefix(config.start.as_str()) else {
                continue;
            };

            let close_index =
                after_open
                    .find(config.end.as_str())
                    .ok_or_else(|| ParseError::UnterminatedMustache {
                        closer: config.end.clone(),
                        location: cursor.location(),
                    })?;

            let consumed = config.start.len() + close_index + config.end.len();
            let token = classify(&after_open[..close_index], triple, cursor.span(consumed));
            return Ok(Some(Converted { token, consumed }));
        }

        Ok(None)
    }
}

fn classify(content: &str, triple: bool, source_span: ParseSourceSpan) -> Token {
    let content = content.trim();
    let mustache = |expression: &str| MustacheToken {
        expression: expression.trim().to_string(),
        source_span,
    };

    if triple {
        return Token::TripleInterpolation(mustache(content));
    }

    let mut rest = content.chars();
    match rest.next() {
        Some(chars::HASH) => Token::SectionOpen(mustache(rest.as_str())),
        Some(chars::CARET) => Token::InvertedSectionOpen(mustache(rest.as_str())),
        Some(chars::SLASH) => Token::SectionClose(mustache(rest.as_str())),
        Some(chars::GT) => Token::Partial(mustache(rest.as_str())),
        Some(chars::BANG) => Token::MustacheComment(mustache(rest.as_str())),
        Some(chars::AMPERSAND) => Token::TripleInterpolation(mustache(rest.as_str())),
        _ => Token::Interpolation(mustache(content)),
    }
}
