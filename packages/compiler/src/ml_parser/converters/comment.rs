//! Comment and DocType Converters

use super::{Converted, Converter};
use crate::config::ParseOptions;
use crate::error::{ParseError, Result};
use crate::ml_parser::context::Context;
use crate::ml_parser::cursor::Cursor;
use crate::ml_parser::tokens::{CommentToken, DocTypeToken, Token};

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

/// `<!-- ... -->`, value kept raw
pub struct CommentConverter;

impl Converter for CommentConverter {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn attempt(
        &self,
        cursor: &Cursor<'_>,
        context: &Context<'_>,
        _options: &ParseOptions,
    ) -> Result<Option<Converted>> {
        if context.inside.is_some() {
            return Ok(None);
        }
        let Some(body) = cursor.remaining().strip_prefix(COMMENT_START) else {
            return Ok(None);
        };

        let end = body
            .find(COMMENT_END)
            .ok_or_else(|| ParseError::UnterminatedComment {
                location: cursor.location(),
            })?;

        let consumed = COMMENT_START.len() + end + COMMENT_END.len();
        Ok(Some(Converted {
            token: Token::Comment(CommentToken {
                value: body[..end].to_string(),
                source_span: cursor.span(consumed),
            }),
            consumed,
        }))
    }
}

/// `<!DOCTYPE html>` and any other `<!...>` that is not a comment
pub struct DocTypeConverter;

impl Converter for DocTypeConverter {
    fn name(&self) -> &'static str {
        "doctype"
    }

    fn attempt(
        &self,
        cursor: &Cursor<'_>,
        context: &Context<'_>,
        _options: &ParseOptions,
    ) -> Result<Option<Converted>> {
        if context.inside.is_some() {
            return Ok(None);
        }
        let remaining = cursor.remaining();
        if remaining.starts_with(COMMENT_START) {
            return Ok(None);
        }
        let Some(body) = remaining.strip_prefix("<!") else {
            return Ok(None);
        };

        let end = body.find('>').ok_or_else(|| ParseError::UnterminatedTag {
            name: "!".to_string(),
            location: cursor.location(),
            expected: "expected \">\" to end the declaration".to_string(),
        })?;

        let consumed = 2 + end + 1;
        Ok(Some(Converted {
            token: Token::DocType(DocTypeToken {
                value: body[..end].to_string(),
                source_span: cursor.span(consumed),
            }),
            consumed,
        }))
    }
}
