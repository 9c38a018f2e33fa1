//! ML Parser
//!
//! Builds the node tree from the flat token stream. Element nesting was
//! already checked by the tokenizer; this pass adds mustache sections, which
//! must nest inside the element that contains their opener.

use super::ast::{Comment, DocType, Element, Interpolation, Node, Partial, Section, Text};
use super::html_whitespaces::collapse_whitespace;
use super::lexer::tokenize;
use super::tags::is_void_element;
use super::tokens::{MustacheToken, TagCloseToken, TagOpenToken, TextToken, Token};
use crate::config::ParseOptions;
use crate::error::{ParseError, Result};
use log::debug;

/// Tokenize `source` and nest the tokens into a tree
pub fn parse(source: &str, options: &ParseOptions) -> Result<Vec<Node>> {
    let tokens = tokenize(source, options)?;
    TreeBuilder::new(options.preserve_whitespace).build(tokens)
}

#[derive(Debug)]
enum NodeContainer {
    Element(Element),
    Section(Section),
}

pub struct TreeBuilder {
    container_stack: Vec<NodeContainer>,
    root_nodes: Vec<Node>,
    preserve_whitespace: bool,
}

impl TreeBuilder {
    pub fn new(preserve_whitespace: bool) -> Self {
        TreeBuilder {
            container_stack: Vec::new(),
            root_nodes: Vec::new(),
            preserve_whitespace,
        }
    }

    pub fn build(mut self, tokens: Vec<Token>) -> Result<Vec<Node>> {
        debug!("building tree from {} tokens", tokens.len());

        for token in tokens {
            match token {
                Token::Text(text) => self.add_text(text),
                Token::Interpolation(t) => self.add_to_parent(Node::Interpolation(interpolation(t))),
                Token::TripleInterpolation(t) => {
                    self.add_to_parent(Node::TripleInterpolation(interpolation(t)))
                }
                Token::SectionOpen(t) => self.push_section(t, false),
                Token::InvertedSectionOpen(t) => self.push_section(t, true),
                Token::SectionClose(t) => self.pop_section(t)?,
                Token::Partial(t) => self.add_to_parent(Node::Partial(Partial {
                    name: t.expression,
                    source_span: t.source_span,
                })),
                Token::MustacheComment(_) => {}
                Token::TagOpen(tag) => self.push_element(tag),
                Token::TagClose(tag) => self.pop_element(tag)?,
                Token::Comment(t) => self.add_to_parent(Node::Comment(Comment {
                    value: t.value,
                    source_span: t.source_span,
                })),
                Token::DocType(t) => self.add_to_parent(Node::DocType(DocType {
                    value: t.value,
                    source_span: t.source_span,
                })),
            }
        }

        if let Some(container) = self.container_stack.pop() {
            return Err(unclosed(&container));
        }

        debug!("built {} root nodes", self.root_nodes.len());
        Ok(self.root_nodes)
    }

    fn add_to_parent(&mut self, node: Node) {
        match self.container_stack.last_mut() {
            Some(NodeContainer::Element(element)) => element.children.push(node),
            Some(NodeContainer::Section(section)) => section.children.push(node),
            None => self.root_nodes.push(node),
        }
    }

    fn siblings(&mut self) -> &mut Vec<Node> {
        match self.container_stack.last_mut() {
            Some(NodeContainer::Element(element)) => &mut element.children,
            Some(NodeContainer::Section(section)) => &mut section.children,
            None => &mut self.root_nodes,
        }
    }

    /// Text split only by a dropped token (a stripped or mustache comment) is
    /// joined back
    fn add_text(&mut self, token: TextToken) {
        let preserve_whitespace = self.preserve_whitespace;
        if let Some(Node::Text(previous)) = self.siblings().last_mut() {
            previous.value.push_str(&token.value);
            if !preserve_whitespace {
                previous.value = collapse_whitespace(&previous.value).into_owned();
            }
            previous.source_span.end = token.source_span.end;
            return;
        }
        self.add_to_parent(Node::Text(Text {
            value: token.value,
            source_span: token.source_span,
        }));
    }

    fn push_element(&mut self, tag: TagOpenToken) {
        let self_closing = tag.self_closing || is_void_element(&tag.name);
        let element = Element {
            name: tag.name,
            attributes: tag.attributes,
            children: Vec::new(),
            self_closing,
            source_span: tag.source_span,
            start_source_span: tag.source_span,
            end_source_span: None,
        };
        if self_closing {
            self.add_to_parent(Node::Element(element));
        } else {
            self.container_stack.push(NodeContainer::Element(element));
        }
    }

    fn pop_element(&mut self, tag: TagCloseToken) -> Result<()> {
        match self.container_stack.pop() {
            Some(NodeContainer::Element(mut element)) if element.name == tag.name => {
                element.source_span.end = tag.source_span.end;
                element.end_source_span = Some(tag.source_span);
                self.add_to_parent(Node::Element(element));
                Ok(())
            }
            Some(container @ NodeContainer::Section(_)) => Err(unclosed(&container)),
            other => Err(ParseError::MismatchedCloseTag {
                found: tag.name,
                expected: other.and_then(|container| match container {
                    NodeContainer::Element(element) => Some(element.name),
                    NodeContainer::Section(_) => None,
                }),
                location: tag.source_span.start,
            }),
        }
    }

    fn push_section(&mut self, token: MustacheToken, inverted: bool) {
        self.container_stack.push(NodeContainer::Section(Section {
            expression: token.expression,
            inverted,
            children: Vec::new(),
            source_span: token.source_span,
            start_source_span: token.source_span,
            end_source_span: None,
        }));
    }

    /// `{{/}}` closes the innermost section; a named closer must repeat the
    /// opener's expression or its first word (`{{#each items}}...{{/each}}`).
    fn pop_section(&mut self, token: MustacheToken) -> Result<()> {
        let matches = match self.container_stack.last() {
            Some(NodeContainer::Section(section)) => {
                closes_section(&token.expression, &section.expression)
            }
            _ => false,
        };

        if matches {
            if let Some(NodeContainer::Section(mut section)) = self.container_stack.pop() {
                section.source_span.end = token.source_span.end;
                section.end_source_span = Some(token.source_span);
                self.add_to_parent(Node::Section(section));
            }
            return Ok(());
        }

        Err(ParseError::MismatchedSectionClose {
            found: token.expression,
            expected: match self.container_stack.last() {
                Some(NodeContainer::Section(section)) => Some(section.expression.clone()),
                _ => None,
            },
            location: token.source_span.start,
        })
    }
}

fn interpolation(token: MustacheToken) -> Interpolation {
    Interpolation {
        expression: token.expression,
        source_span: token.source_span,
    }
}

fn closes_section(closer: &str, opener: &str) -> bool {
    closer.is_empty()
        || closer == opener
        || opener.split_whitespace().next() == Some(closer)
}

fn unclosed(container: &NodeContainer) -> ParseError {
    match container {
        NodeContainer::Section(section) => ParseError::UnclosedSection {
            expression: section.expression.clone(),
            location: section.start_source_span.start,
        },
        NodeContainer::Element(element) => ParseError::UnterminatedTag {
            name: element.name.clone(),
            location: element.start_source_span.start,
            expected: format!("expected </{}>", element.name),
        },
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        TreeBuilder::new(false)
    }
}
