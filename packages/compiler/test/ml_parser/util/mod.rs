#![allow(dead_code)]

//! ML Parser Test Utilities
//!
//! Turn tokens and nodes into rows of strings so expectations stay readable


use stache_compiler::ml_parser::ast::Node;
use stache_compiler::ml_parser::tokens::{Attribute, Token};
use stache_compiler::{parse, tokenize, ParseError, ParseLocation, ParseOptions};

pub use serializer::serialize_nodes;

fn tokenize_ok(input: &str, options: &ParseOptions) -> Vec<Token> {
    tokenize(input, options)
        .unwrap_or_else(|error| panic!("unexpected error: {}", error.contextual_message(input)))
}

/// `[TYPE, value]` per token
pub fn tokenize_and_humanize_parts(input: &str, options: &ParseOptions) -> Vec<Vec<String>> {
    tokenize_ok(input, options)
        .iter()
        .map(|token| {
            vec![
                token.token_type().humanize().to_string(),
                token.value().to_string(),
            ]
        })
        .collect()
}

/// `[TYPE, "line:col"]` per token, zero based
pub fn tokenize_and_humanize_line_column(
    input: &str,
    options: &ParseOptions,
) -> Vec<Vec<String>> {
    tokenize_ok(input, options)
        .iter()
        .map(|token| {
            vec![
                token.token_type().humanize().to_string(),
                humanize_line_column(&token.source_span().start),
            ]
        })
        .collect()
}

/// `[TYPE, covered source text]` per token
pub fn tokenize_and_humanize_source_spans(
    input: &str,
    options: &ParseOptions,
) -> Vec<Vec<String>> {
    tokenize_ok(input, options)
        .iter()
        .map(|token| {
            vec![
                token.token_type().humanize().to_string(),
                token.source_span().text(input).to_string(),
            ]
        })
        .collect()
}

/// `[error kind, "line:col"]` of the failure
pub fn tokenize_and_humanize_error(input: &str, options: &ParseOptions) -> Vec<String> {
    match tokenize(input, options) {
        Ok(tokens) => panic!("expected an error, got {} tokens", tokens.len()),
        Err(error) => humanize_error(&error),
    }
}

pub fn humanize_error(error: &ParseError) -> Vec<String> {
    let kind = serde_json::to_value(error)
        .ok()
        .and_then(|value| value["kind"].as_str().map(str::to_string))
        .unwrap_or_default();
    let location = error
        .location()
        .map(|location| humanize_line_column(&location))
        .unwrap_or_default();
    vec![kind, location]
}

pub fn humanize_line_column(location: &ParseLocation) -> String {
    format!("{}:{}", location.line, location.col)
}

/// Parse and humanize the tree: `[Kind, value, depth]` rows in document order
pub fn parse_and_humanize_dom(input: &str, options: &ParseOptions) -> Vec<Vec<String>> {
    let nodes = parse(input, options)
        .unwrap_or_else(|error| panic!("unexpected error: {}", error.contextual_message(input)));
    humanize_nodes(&nodes)
}

pub fn humanize_nodes(nodes: &[Node]) -> Vec<Vec<String>> {
    let mut humanizer = Humanizer::default();
    for node in nodes {
        humanizer.visit(node);
    }
    humanizer.result
}

#[derive(Default)]
struct Humanizer {
    result: Vec<Vec<String>>,
    depth: usize,
}

impl Humanizer {
    fn row(&mut self, kind: &str, value: &str) {
        self.result
            .push(vec![kind.to_string(), value.to_string(), self.depth.to_string()]);
    }

    fn visit(&mut self, node: &Node) {
        match node {
            Node::Element(element) => {
                let name = if element.self_closing {
                    format!("{}#selfClosing", element.name)
                } else {
                    element.name.clone()
                };
                self.row("Element", &name);
                self.depth += 1;
                for attribute in &element.attributes {
                    self.visit_attribute(attribute);
                }
                self.visit_children(node);
            }
            Node::Text(text) => self.row("Text", &text.value),
            Node::Interpolation(i) => self.row("Interpolation", &i.expression),
            Node::TripleInterpolation(i) => self.row("TripleInterpolation", &i.expression),
            Node::Section(section) => {
                let kind = if section.inverted {
                    "InvertedSection"
                } else {
                    "Section"
                };
                self.row(kind, &section.expression);
                self.depth += 1;
                self.visit_children(node);
            }
            Node::Partial(partial) => self.row("Partial", &partial.name),
            Node::Comment(comment) => self.row("Comment", &comment.value),
            Node::DocType(doctype) => self.row("DocType", &doctype.value),
        }
    }

    fn visit_children(&mut self, node: &Node) {
        for child in node.children() {
            self.visit(child);
        }
        self.depth -= 1;
    }

    fn visit_attribute(&mut self, attribute: &Attribute) {
        let value = attribute.value.as_deref().unwrap_or("");
        self.row("Attribute", &format!("{}={}", attribute.name, value));
    }
}
