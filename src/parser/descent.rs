//! Cursor-based descent driver
//!
//! The driver owns the token slice and a single integer cursor. One shared
//! container loop serves block, div, header and input parses; the behavior
//! differences live entirely in the grammar tables. Style blocks and settings
//! have their own small sub-parsers since they consume raw content tokens
//! rather than child elements.
//!
//! The top-level entry parses one block and silently ignores any trailing
//! tokens the block does not recognize.

use std::fmt;

use crate::ast::{AstNode, NodeType};
use crate::lexer::{Token, TokenKind};
use crate::parser::grammar::{child_rule, ChildRule};

/// Errors that can occur during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A setting context expected a content token but found this token
    UnexpectedToken(Token),
    /// A setting context expected a content token but the input ended
    UnexpectedEnd,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken(token) => write!(f, "Unexpected token: {}", token),
            ParseError::UnexpectedEnd => write!(f, "Unexpected end of input"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a token sequence into a block-rooted AST.
///
/// Parsing stops at end of input or at the first top-level token the block
/// table does not recognize; unconsumed trailing tokens are ignored.
pub fn parse(tokens: &[Token]) -> Result<AstNode, ParseError> {
    let mut parser = Parser::new(tokens);
    parser.parse_container(NodeType::Block)
}

struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, cursor: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Shared loop for all table-driven containers.
    ///
    /// Looks up the token at the cursor in the container's table and either
    /// recurses, parses a leaf, skips, or stops. The opening keyword token
    /// has already been consumed by the caller.
    fn parse_container(&mut self, container: NodeType) -> Result<AstNode, ParseError> {
        let mut node = AstNode::branch(container);

        while let Some(token) = self.peek() {
            match child_rule(container, token.kind) {
                ChildRule::Container(child_type) => {
                    self.advance();
                    node.add_child(self.parse_container(child_type)?);
                }
                ChildRule::Setting(leaf_type) => {
                    self.advance();
                    node.add_child(self.parse_setting(leaf_type)?);
                }
                ChildRule::StyleBlock => {
                    self.advance();
                    node.add_child(self.parse_style());
                }
                ChildRule::Skip => self.advance(),
                ChildRule::Stop => break,
            }
        }

        Ok(node)
    }

    /// Consume consecutive content tokens into style item leaves.
    ///
    /// Stops at the first non-content token. Never fails; an empty style
    /// block is a valid (and empty-rendering) node.
    fn parse_style(&mut self) -> AstNode {
        let mut node = AstNode::branch(NodeType::Style);

        while let Some(token) = self.peek() {
            if token.kind != TokenKind::TextContent {
                break;
            }
            node.add_child(AstNode::leaf(NodeType::StyleItem, token.text.clone()));
            self.advance();
        }

        node
    }

    /// Consume exactly one content token into a leaf of `leaf_type`.
    ///
    /// The parser's only hard failure path: anything but a content token
    /// here is an error.
    fn parse_setting(&mut self, leaf_type: NodeType) -> Result<AstNode, ParseError> {
        let token = self.peek().ok_or(ParseError::UnexpectedEnd)?;
        if token.kind != TokenKind::TextContent {
            return Err(ParseError::UnexpectedToken(token.clone()));
        }
        let node = AstNode::leaf(leaf_type, token.text.clone());
        self.advance();
        Ok(node)
    }
}
