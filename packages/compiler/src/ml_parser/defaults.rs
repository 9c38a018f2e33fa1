//! Default Configuration
//!
//! Delimiter pairs and the per-tag interpolation policy

use super::tags::RAW_TEXT_ELEMENTS;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Interpolation configuration: one opening/closing delimiter pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct InterpolationConfig {
    pub start: String,
    pub end: String,
}

impl InterpolationConfig {
    pub fn new(start: String, end: String) -> Self {
        InterpolationConfig { start, end }
    }
}

impl From<(String, String)> for InterpolationConfig {
    fn from((start, end): (String, String)) -> Self {
        InterpolationConfig::new(start, end)
    }
}

impl From<InterpolationConfig> for (String, String) {
    fn from(config: InterpolationConfig) -> Self {
        (config.start, config.end)
    }
}

/// Default interpolation config {{ }}
pub fn default_interpolation_config() -> InterpolationConfig {
    InterpolationConfig::new("{{".to_string(), "}}".to_string())
}

/// Default unescaped interpolation config {{{ }}}
pub fn default_triple_interpolation_config() -> InterpolationConfig {
    InterpolationConfig::new("{{{".to_string(), "}}}".to_string())
}

/// Tags whose contents are not interpolated unless the caller says otherwise
pub const DEFAULT_NON_INTERPOLATED_TAGS: &[&str] = &["script", "style"];

/// Whether interpolation delimiters are recognised inside a given tag.
///
/// Tags without an entry interpolate. Caller entries are layered over the
/// defaults, so `{"style": true}` re-enables style interpolation while
/// `script` keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, bool>", into = "IndexMap<String, bool>")]
pub struct InterpolationPolicy {
    entries: IndexMap<String, bool>,
}

impl InterpolationPolicy {
    /// A policy without the default entries: every tag interpolates
    pub fn empty() -> Self {
        InterpolationPolicy {
            entries: IndexMap::new(),
        }
    }

    pub fn set(&mut self, tag_name: impl Into<String>, interpolate: bool) -> &mut Self {
        self.entries.insert(tag_name.into(), interpolate);
        self
    }

    pub fn allows(&self, tag_name: &str) -> bool {
        self.entries.get(tag_name).copied().unwrap_or(true)
    }

    /// Raw text elements keep their contents literal up to their own close tag.
    /// `script` and `style` always are; so is any tag with interpolation off.
    pub fn is_raw_text(&self, tag_name: &str) -> bool {
        RAW_TEXT_ELEMENTS.contains(&tag_name) || !self.allows(tag_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl Default for InterpolationPolicy {
    fn default() -> Self {
        let mut policy = InterpolationPolicy::empty();
        for tag in DEFAULT_NON_INTERPOLATED_TAGS {
            policy.set(*tag, false);
        }
        policy
    }
}

impl From<IndexMap<String, bool>> for InterpolationPolicy {
    fn from(overrides: IndexMap<String, bool>) -> Self {
        let mut policy = InterpolationPolicy::default();
        for (tag, interpolate) in overrides {
            policy.set(tag, interpolate);
        }
        policy
    }
}

impl From<InterpolationPolicy> for IndexMap<String, bool> {
    fn from(policy: InterpolationPolicy) -> Self {
        policy.entries
    }
}
