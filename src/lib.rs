//! # strut
//!
//! A compiler for the strut markup format.
//!
//! strut is a small keyword-driven markup language that compiles to HTML with
//! inline CSS. The pipeline has three stages, each consuming the previous
//! stage's output:
//!
//! - [lexer] - scans raw source text into an ordered sequence of typed tokens
//! - [parser] - consumes the token sequence and builds a single-rooted AST
//! - [codegen] - walks the AST and emits the HTML string
//!
//! Data flows strictly forward: text -> tokens -> AST -> HTML. No stage
//! depends on its successor. The [processor] module ties the stages together
//! behind [processor::compile] and a stage/format processing API.
//!
//! ## Testing
//!
//! Tests use the verified sample documents in the [testing] module rather than
//! ad-hoc inline sources. See that module for the available samples.

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;

pub use ast::{AstNode, NodeType};
pub use codegen::{generate, GenError};
pub use lexer::{tokenize, LexError, Token, TokenKind};
pub use parser::{parse, ParseError};
pub use processor::{compile, CompileError};
