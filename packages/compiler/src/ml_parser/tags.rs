//! ML Parser Tags
//!
//! Tag classes that change how the tokenizer treats an element

use super::defaults::InterpolationPolicy;

/// Elements that never have contents or a close tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Elements whose contents are never parsed as markup
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Tag content types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagContentType {
    /// Text up to the element's own close tag; mustaches only if the policy allows
    RawText,
    /// Nested markup, text and mustaches
    ParsableData,
}

pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

pub fn get_content_type(tag_name: &str, policy: &InterpolationPolicy) -> TagContentType {
    if policy.is_raw_text(tag_name) {
        TagContentType::RawText
    } else {
        TagContentType::ParsableData
    }
}
