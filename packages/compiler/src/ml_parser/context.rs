//! Context Stack
//!
//! The elements opened and not yet closed, innermost last. Only the
//! tokenizer pushes and pops; converters see a read-only [`Context`].

use super::defaults::InterpolationPolicy;
use super::tags::{get_content_type, TagContentType};
use crate::error::{ParseError, Result};
use crate::parse_util::ParseLocation;

/// What a converter needs to know about where the cursor is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context<'a> {
    /// Raw text element the cursor is inside, if any
    pub inside: Option<&'a str>,
    /// Whether mustache openers are recognised here
    pub interpolate: bool,
}

impl Context<'_> {
    pub fn top_level() -> Self {
        Context {
            inside: None,
            interpolate: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenElement {
    pub name: String,
    pub location: ParseLocation,
    pub content_type: TagContentType,
    pub interpolate: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ContextStack {
    elements: Vec<OpenElement>,
}

impl ContextStack {
    pub fn new() -> Self {
        ContextStack::default()
    }

    pub fn push(&mut self, name: &str, location: ParseLocation, policy: &InterpolationPolicy) {
        self.elements.push(OpenElement {
            name: name.to_string(),
            location,
            content_type: get_content_type(name, policy),
            interpolate: policy.allows(name),
        });
    }

    /// Close the innermost element, which must be called `name`
    pub fn pop_matching(&mut self, name: &str, location: ParseLocation) -> Result<OpenElement> {
        if self.elements.last().is_some_and(|open| open.name == name) {
            if let Some(open) = self.elements.pop() {
                return Ok(open);
            }
        }
        Err(ParseError::MismatchedCloseTag {
            found: name.to_string(),
            expected: self.innermost().map(|open| open.name.clone()),
            location,
        })
    }

    pub fn innermost(&self) -> Option<&OpenElement> {
        self.elements.last()
    }

    pub fn depth(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Ordinary elements keep the top-level barrier; only a raw text
    /// element becomes the `inside` context.
    pub fn context(&self) -> Context<'_> {
        match self.elements.last() {
            Some(open) if open.content_type == TagContentType::RawText => Context {
                inside: Some(&open.name),
                interpolate: open.interpolate,
            },
            _ => Context::top_level(),
        }
    }
}
