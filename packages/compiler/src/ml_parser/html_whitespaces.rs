//! Whitespace Collapsing
//!
//! Only runs of two or more whitespace characters are touched; a single
//! whitespace character is kept as written.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static WS_REPLACE_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Replace every run of two or more whitespace characters with one space
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    WS_REPLACE_REGEXP.replace_all(text, " ")
}
