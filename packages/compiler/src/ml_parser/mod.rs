//! ML (Markup Language) Parser Module
//!
//! Context sensitive tokenizer for HTML with mustache interpolation, plus the
//! tree builder on top of it

pub mod ast;
pub mod barrier;
pub mod context;
pub mod converters;
pub mod cursor;
pub mod defaults;
pub mod entities;
pub mod html_whitespaces;
pub mod lexer;
pub mod parser;
pub mod tags;
pub mod tokens;

pub use ast::Node;
pub use converters::{Converted, Converter, ConverterSet};
pub use defaults::*;
pub use entities::decode_character_references;
pub use html_whitespaces::collapse_whitespace;
pub use lexer::{tokenize, tokenize_many, Tokenizer};
pub use parser::{parse, TreeBuilder};
pub use tags::*;
pub use tokens::*;
