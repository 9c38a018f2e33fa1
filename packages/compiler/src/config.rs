//! Parse Options
//!
//! The immutable configuration threaded into every parse

use crate::assertions::{
    assert_distinct_openers, assert_interpolation_symbols, assert_policy_tag_names,
};
use crate::error::Result;
use crate::ml_parser::defaults::{
    default_interpolation_config, default_triple_interpolation_config, InterpolationConfig,
    InterpolationPolicy,
};
use serde::{Deserialize, Serialize};

/// Options for one parse. Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Plain (escaped) interpolation delimiters
    pub delimiters: InterpolationConfig,
    /// Unescaped interpolation delimiters
    pub triple_delimiters: InterpolationConfig,
    /// Per-tag interpolation switch
    pub interpolate: InterpolationPolicy,
    /// Keep whitespace runs in text as written
    pub preserve_whitespace: bool,
    /// Drop `<!-- -->` comments from the output
    pub strip_comments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            delimiters: default_interpolation_config(),
            triple_delimiters: default_triple_interpolation_config(),
            interpolate: InterpolationPolicy::default(),
            preserve_whitespace: false,
            strip_comments: false,
        }
    }
}

impl ParseOptions {
    pub fn with_delimiters(mut self, start: &str, end: &str) -> Self {
        self.delimiters = InterpolationConfig::new(start.to_string(), end.to_string());
        self
    }

    pub fn with_triple_delimiters(mut self, start: &str, end: &str) -> Self {
        self.triple_delimiters = InterpolationConfig::new(start.to_string(), end.to_string());
        self
    }

    pub fn with_interpolation(mut self, tag_name: &str, interpolate: bool) -> Self {
        self.interpolate.set(tag_name, interpolate);
        self
    }

    pub fn with_preserve_whitespace(mut self, preserve: bool) -> Self {
        self.preserve_whitespace = preserve;
        self
    }

    pub fn with_strip_comments(mut self, strip: bool) -> Self {
        self.strip_comments = strip;
        self
    }

    /// Reject structurally unusable options before any scanning
    pub fn validate(&self) -> Result<()> {
        assert_interpolation_symbols("delimiters", &self.delimiters)?;
        assert_interpolation_symbols("tripleDelimiters", &self.triple_delimiters)?;
        assert_distinct_openers(&self.delimiters, &self.triple_delimiters)?;
        assert_policy_tag_names(&self.interpolate)
    }
}
