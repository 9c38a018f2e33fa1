//! Error Types
//!
//! Every failure aborts the parse and reports where it happened and what was
//! expected there.

use crate::parse_util::ParseLocation;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse failure
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind")]
pub enum ParseError {
    /// A tag was opened but never closed (no `>`, or no matching close tag)
    #[error("Unterminated tag <{name}> at {location}: {expected}")]
    UnterminatedTag {
        name: String,
        location: ParseLocation,
        expected: String,
    },

    /// A close tag that does not match the innermost open element
    #[error("Mismatched close tag </{found}> at {location}: {}", describe_expected_close(.expected))]
    MismatchedCloseTag {
        found: String,
        expected: Option<String>,
        location: ParseLocation,
    },

    /// No converter could advance the cursor although input remains
    #[error("Unexpected template content at {location}: {snippet:?} ({expected})")]
    UnparseableResidue {
        snippet: String,
        location: ParseLocation,
        expected: String,
    },

    /// Structurally invalid options, detected before scanning starts
    #[error("Invalid configuration: {msg}")]
    InvalidConfiguration { msg: String },

    /// A mustache opener without its closer
    #[error("Unterminated mustache at {location}: expected \"{closer}\"")]
    UnterminatedMustache {
        closer: String,
        location: ParseLocation,
    },

    /// `<!--` without `-->`
    #[error("Unterminated comment at {location}: expected \"-->\"")]
    UnterminatedComment { location: ParseLocation },

    /// `{{/x}}` that does not close the innermost section
    #[error("Mismatched section close {{{{/{found}}}}} at {location}: {}", describe_expected_section(.expected))]
    MismatchedSectionClose {
        found: String,
        expected: Option<String>,
        location: ParseLocation,
    },

    /// A section still open at the end of its container
    #[error("Unclosed section {{{{#{expression}}}}} opened at {location}: expected a matching section close")]
    UnclosedSection {
        expression: String,
        location: ParseLocation,
    },
}

impl ParseError {
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        ParseError::InvalidConfiguration { msg: msg.into() }
    }

    /// Where the failure happened; configuration errors have no location
    pub fn location(&self) -> Option<ParseLocation> {
        match self {
            ParseError::UnterminatedTag { location, .. }
            | ParseError::MismatchedCloseTag { location, .. }
            | ParseError::UnparseableResidue { location, .. }
            | ParseError::UnterminatedMustache { location, .. }
            | ParseError::UnterminatedComment { location }
            | ParseError::MismatchedSectionClose { location, .. }
            | ParseError::UnclosedSection { location, .. } => Some(*location),
            ParseError::InvalidConfiguration { .. } => None,
        }
    }

    /// Byte offset of the failure
    pub fn offset(&self) -> Option<usize> {
        self.location().map(|location| location.offset)
    }

    /// The message followed by the source around the failure, e.g.
    /// `... ("<p>{{[ERROR ->]name")`
    pub fn contextual_message(&self, source: &str) -> String {
        match self.location() {
            Some(location) => {
                let (before, after) = location.get_context(source, 100, 3);
                format!("{} (\"{}[ERROR ->]{}\")", self, before, after)
            }
            None => self.to_string(),
        }
    }
}

fn describe_expected_close(expected: &Option<String>) -> String {
    match expected {
        Some(name) => format!("expected </{}>", name),
        None => "no element is open".to_string(),
    }
}

fn describe_expected_section(expected: &Option<String>) -> String {
    match expected {
        Some(expression) => format!("expected {{{{/{}}}}}", expression),
        None => "no section is open".to_string(),
    }
}
