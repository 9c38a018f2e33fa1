#![deny(clippy::all)]

//! Stache Compiler
//!
//! Front end for HTML templates with `{{ }}` / `{{{ }}}` mustaches: a single
//! forward pass turns the source into typed tokens, and an optional second
//! pass nests them into a tree.
//!
//! ```
//! use stache_compiler::{tokenize, ParseOptions, TokenType};
//!
//! let tokens = tokenize("<p>Hi {{name}}</p>", &ParseOptions::default()).unwrap();
//! assert_eq!(tokens[2].token_type(), TokenType::Interpolation);
//! ```

pub mod assertions;
pub mod chars;
pub mod config;
pub mod error;
pub mod ml_parser;
pub mod parse_util;

pub use config::ParseOptions;
pub use error::{ParseError, Result};
pub use ml_parser::ast::Node;
pub use ml_parser::tokens::{Token, TokenType};
pub use ml_parser::{parse, tokenize, tokenize_many};
pub use parse_util::{ParseLocation, ParseSourceSpan};
