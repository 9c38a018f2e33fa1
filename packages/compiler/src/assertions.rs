//! Assertions Module
//!
//! Structural checks run once on the options before a parse starts

use crate::error::{ParseError, Result};
use crate::ml_parser::defaults::{InterpolationConfig, InterpolationPolicy};
use once_cell::sync::Lazy;
use regex::Regex;

static UNUSABLE_INTERPOLATION_REGEXPS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\s*$").unwrap(),         // empty
        Regex::new(r"[<>]").unwrap(),          // html tag
        Regex::new(r"&(#|[a-zA-Z])").unwrap(), // character reference
        Regex::new(r"^//").unwrap(),           // comment
    ]
});

pub fn assert_interpolation_symbols(identifier: &str, value: &InterpolationConfig) -> Result<()> {
    for regexp in UNUSABLE_INTERPOLATION_REGEXPS.iter() {
        if regexp.is_match(&value.start) || regexp.is_match(&value.end) {
            return Err(ParseError::invalid_configuration(format!(
                "'{}' ['{}', '{}'] contains unusable interpolation symbol.",
                identifier, value.start, value.end
            )));
        }
    }

    Ok(())
}

/// Plain and triple openers must differ, otherwise every mustache is ambiguous
pub fn assert_distinct_openers(
    plain: &InterpolationConfig,
    triple: &InterpolationConfig,
) -> Result<()> {
    if plain.start == triple.start {
        return Err(ParseError::invalid_configuration(format!(
            "'delimiters' and 'tripleDelimiters' share the opening symbol '{}'.",
            plain.start
        )));
    }
    Ok(())
}

pub fn assert_policy_tag_names(policy: &InterpolationPolicy) -> Result<()> {
    if let Some(name) = policy
        .iter()
        .map(|(name, _)| name)
        .find(|name| name.trim().is_empty() || name.contains(char::is_whitespace))
    {
        return Err(ParseError::invalid_configuration(format!(
            "'interpolate' contains an invalid tag name '{}'.",
            name
        )));
    }
    Ok(())
}
