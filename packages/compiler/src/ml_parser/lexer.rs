//! ML Parser Lexer
//!
//! Walks the source once, front to back. At every position the converters are
//! asked in priority order; the first one producing a token wins and the
//! cursor moves past what it consumed. Tag tokens drive the context stack,
//! which in turn decides how the next piece of input is read.

use super::context::ContextStack;
use super::converters::{Converted, ConverterSet};
use super::cursor::Cursor;
use super::tags::is_void_element;
use super::tokens::Token;
use crate::config::ParseOptions;
use crate::error::{ParseError, Result};
use log::{debug, trace};
use rayon::prelude::*;

/// How much of the unreadable input an error quotes
const RESIDUE_SNIPPET_CHARS: usize = 20;

/// Tokenize `source` with the standard converters
pub fn tokenize(source: &str, options: &ParseOptions) -> Result<Vec<Token>> {
    Tokenizer::new(source, options)?.tokenize()
}

/// Tokenize independent sources in parallel with shared options.
/// Results come back in input order.
pub fn tokenize_many<S>(sources: &[S], options: &ParseOptions) -> Vec<Result<Vec<Token>>>
where
    S: AsRef<str> + Sync,
{
    sources
        .par_iter()
        .map(|source| tokenize(source.as_ref(), options))
        .collect()
}

pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    options: &'a ParseOptions,
    converters: ConverterSet,
    stack: ContextStack,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    /// Validates `options` before anything is scanned
    pub fn new(source: &'a str, options: &'a ParseOptions) -> Result<Self> {
        options.validate()?;
        Ok(Tokenizer {
            cursor: Cursor::new(source),
            options,
            converters: ConverterSet::standard(),
            stack: ContextStack::new(),
            tokens: Vec::new(),
        })
    }

    /// Replace the converter list
    pub fn with_converters(mut self, converters: ConverterSet) -> Self {
        self.converters = converters;
        self
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        debug!(
            "tokenizing {} bytes with {} converters",
            self.cursor.source().len(),
            self.converters.len()
        );

        while !self.cursor.is_at_end() {
            let Converted { token, consumed } = self.convert_next()?;
            self.transition(&token)?;
            self.cursor.advance(consumed);

            if self.options.strip_comments && matches!(token, Token::Comment(_)) {
                trace!("dropped comment at {}", token.source_span().start);
                continue;
            }
            trace!(
                "{} {:?} at {}",
                token.token_type().humanize(),
                token.value(),
                token.source_span().start
            );
            self.tokens.push(token);
        }

        if let Some(open) = self.stack.innermost() {
            return Err(ParseError::UnterminatedTag {
                name: open.name.clone(),
                location: open.location,
                expected: format!("expected </{}>", open.name),
            });
        }

        debug!("produced {} tokens", self.tokens.len());
        Ok(self.tokens)
    }

    /// First token any converter reads at the cursor. A converter that
    /// consumes nothing counts as declining.
    fn convert_next(&self) -> Result<Converted> {
        let context = self.stack.context();
        for converter in self.converters.iter() {
            match converter.attempt(&self.cursor, &context, self.options)? {
                Some(converted) if converted.consumed > 0 => return Ok(converted),
                _ => {}
            }
        }

        let remaining = self.cursor.remaining();
        let expected = match context.inside {
            Some(name) => format!("expected text or </{}>", name),
            None => "expected text, a tag or a mustache".to_string(),
        };
        Err(ParseError::UnparseableResidue {
            snippet: remaining.chars().take(RESIDUE_SNIPPET_CHARS).collect(),
            location: self.cursor.location(),
            expected,
        })
    }

    fn transition(&mut self, token: &Token) -> Result<()> {
        match token {
            Token::TagOpen(tag) if !tag.self_closing && !is_void_element(&tag.name) => {
                self.stack
                    .push(&tag.name, tag.source_span.start, &self.options.interpolate);
                debug!(
                    "opened <{}> at {}, depth {}, context {:?}",
                    tag.name,
                    tag.source_span.start,
                    self.stack.depth(),
                    self.stack.context()
                );
            }
            Token::TagClose(tag) => {
                self.stack.pop_matching(&tag.name, tag.source_span.start)?;
                debug!(
                    "closed </{}> at {}, depth {}",
                    tag.name,
                    tag.source_span.start,
                    self.stack.depth()
                );
            }
            _ => {}
        }
        Ok(())
    }
}
