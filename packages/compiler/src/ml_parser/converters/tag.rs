//! Tag Converters
//!
//! `<name attr="value" ...>`, `<name ... />` and `</name>`

use super::{Converted, Converter, Scanner};
use crate::chars;
use crate::config::ParseOptions;
use crate::error::{ParseError, Result};
use crate::ml_parser::context::Context;
use crate::ml_parser::cursor::Cursor;
use crate::ml_parser::entities::decode_character_references;
use crate::ml_parser::tokens::{Attribute, TagCloseToken, TagOpenToken, Token};

pub struct OpenTagConverter;

impl Converter for OpenTagConverter {
    fn name(&self) -> &'static str {
        "open-tag"
    }

    fn attempt(
        &self,
        cursor: &Cursor<'_>,
        context: &Context<'_>,
        _options: &ParseOptions,
    ) -> Result<Option<Converted>> {
        // nothing opens inside a raw text element
        if context.inside.is_some() {
            return Ok(None);
        }

        let remaining = cursor.remaining();
        if !remaining.starts_with(chars::LT) {
            return Ok(None);
        }

        let mut scanner = Scanner::new(remaining, 1);
        if !scanner.peek().is_some_and(chars::is_tag_name_start) {
            return Ok(None);
        }
        let name = scanner.eat_while(chars::is_tag_name_char);

        let unterminated = |expected: &str| ParseError::UnterminatedTag {
            name: name.to_string(),
            location: cursor.location(),
            expected: expected.to_string(),
        };

        let mut attributes = Vec::new();
        let self_closing = loop {
            scanner.skip_whitespace();
            match scanner.peek() {
                None => return Err(unterminated("expected \">\"")),
                Some(chars::GT) => {
                    scanner.bump();
                    break false;
                }
                Some(chars::SLASH) => {
                    scanner.bump();
                    if scanner.peek() == Some(chars::GT) {
                        scanner.bump();
                        break true;
                    }
                }
                Some(_) => {
                    if let Some(attribute) = consume_attribute(&mut scanner, cursor)
                        .map_err(|_| unterminated("expected a closing quote"))?
                    {
                        attributes.push(attribute);
                    }
                }
            }
        };

        let consumed = scanner.pos;
        Ok(Some(Converted {
            token: Token::TagOpen(TagOpenToken {
                name: name.to_string(),
                attributes,
                self_closing,
                source_span: cursor.span(consumed),
            }),
            consumed,
        }))
    }
}

/// Quoted value ran to the end of input
struct UnclosedQuote;

/// Read one attribute. Stray characters that cannot start a name (a lone
/// quote or `=`) are skipped and yield `None`.
fn consume_attribute(
    scanner: &mut Scanner<'_>,
    cursor: &Cursor<'_>,
) -> std::result::Result<Option<Attribute>, UnclosedQuote> {
    let start = scanner.pos;
    let name = scanner.eat_while(|ch| !chars::is_attribute_name_end(ch));
    if name.is_empty() {
        scanner.bump();
        return Ok(None);
    }

    let after_name = scanner.pos;
    scanner.skip_whitespace();
    let value = if scanner.peek() == Some(chars::EQ) {
        scanner.bump();
        scanner.skip_whitespace();
        Some(consume_attribute_value(scanner)?)
    } else {
        scanner.pos = after_name;
        None
    };

    Ok(Some(Attribute {
        name: name.to_string(),
        value: value.map(|raw| decode_character_references(raw).into_owned()),
        source_span: cursor.span_within(start, scanner.pos),
    }))
}

fn consume_attribute_value<'a>(
    scanner: &mut Scanner<'a>,
) -> std::result::Result<&'a str, UnclosedQuote> {
    match scanner.peek() {
        Some(quote) if chars::is_quote(quote) => {
            scanner.bump();
            let value = scanner.eat_while(|ch| ch != quote);
            if scanner.peek() != Some(quote) {
                return Err(UnclosedQuote);
            }
            scanner.bump();
            Ok(value)
        }
        _ => Ok(scanner.eat_while(|ch| !chars::is_whitespace(ch) && ch != chars::GT)),
    }
}

pub struct CloseTagConverter;

impl Converter for CloseTagConverter {
    fn name(&self) -> &'static str {
        "close-tag"
    }

    /// Any well-formed close tag is read, even inside a raw text element; the
    /// tokenizer decides whether it matches.
    fn attempt(
        &self,
        cursor: &Cursor<'_>,
        _context: &Context<'_>,
        _options: &ParseOptions,
    ) -> Result<Option<Converted>> {
        let remaining = cursor.remaining();
        if !remaining.starts_with("</") {
            return Ok(None);
        }

        let mut scanner = Scanner::new(remaining, 2);
        if !scanner.peek().is_some_and(chars::is_tag_name_start) {
            return Ok(None);
        }
        let name = scanner.eat_while(chars::is_tag_name_char);
        scanner.skip_whitespace();
        if scanner.peek() != Some(chars::GT) {
            return Err(ParseError::UnterminatedTag {
                name: name.to_string(),
                location: cursor.location(),
                expected: "expected \">\" to end the close tag".to_string(),
            });
        }
        scanner.bump();

        let consumed = scanner.pos;
        Ok(Some(Converted {
            token: Token::TagClose(TagCloseToken {
                name: name.to_string(),
                source_span: cursor.span(consumed),
            }),
            consumed,
        }))
    }
}
