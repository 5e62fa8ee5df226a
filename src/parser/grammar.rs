//! Per-container allowed-child tables
//!
//! One dispatch table per container type, as an explicit map from token kind
//! to child rule. This keeps the grammar auditable: the full set of tokens a
//! container accepts, stops at, or skips is visible in one place, and adding
//! an element means adding a table row rather than threading a new branch
//! through the descent loop.

use crate::ast::NodeType;
use crate::lexer::TokenKind;

/// What a container does with the token at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRule {
    /// Recurse into the sub-parser for this container type
    Container(NodeType),
    /// Parse a single-value setting leaf of this type
    Setting(NodeType),
    /// Parse a style block (consecutive content tokens)
    StyleBlock,
    /// End this container's parse; the token belongs to an ancestor
    Stop,
    /// Advance one token without producing a node (lenient recovery)
    Skip,
}

/// Look up the child rule for `kind` inside a `container` parse.
///
/// Only `Block`, `Div`, `Header` and `Input` are containers with tables;
/// style blocks consume content tokens directly and settings are single
/// leaves, so neither appears here.
pub fn child_rule(container: NodeType, kind: TokenKind) -> ChildRule {
    match container {
        NodeType::Block => block_rule(kind),
        NodeType::Div => div_rule(kind),
        NodeType::Header => header_rule(kind),
        NodeType::Input => input_rule(kind),
        // Not a container; nothing is accepted.
        _ => ChildRule::Stop,
    }
}

fn block_rule(kind: TokenKind) -> ChildRule {
    match kind {
        TokenKind::Div => ChildRule::Container(NodeType::Div),
        TokenKind::Header => ChildRule::Container(NodeType::Header),
        TokenKind::Input => ChildRule::Container(NodeType::Input),
        _ => ChildRule::Stop,
    }
}

fn div_rule(kind: TokenKind) -> ChildRule {
    match kind {
        TokenKind::Style => ChildRule::StyleBlock,
        TokenKind::Header => ChildRule::Container(NodeType::Header),
        TokenKind::Input => ChildRule::Container(NodeType::Input),
        TokenKind::Div => ChildRule::Container(NodeType::Div),
        TokenKind::Class => ChildRule::Setting(NodeType::Class),
        TokenKind::Text | TokenKind::Placeholder => ChildRule::Stop,
        // Div bodies tolerate stray tokens instead of failing.
        _ => ChildRule::Skip,
    }
}

fn header_rule(kind: TokenKind) -> ChildRule {
    match kind {
        TokenKind::Text => ChildRule::Setting(NodeType::Text),
        TokenKind::Style => ChildRule::StyleBlock,
        TokenKind::Class => ChildRule::Setting(NodeType::Class),
        _ => ChildRule::Stop,
    }
}

fn input_rule(kind: TokenKind) -> ChildRule {
    match kind {
        TokenKind::Text => ChildRule::Setting(NodeType::Text),
        TokenKind::Placeholder => ChildRule::Setting(NodeType::Placeholder),
        TokenKind::Style => ChildRule::StyleBlock,
        TokenKind::Class => ChildRule::Setting(NodeType::Class),
        _ => ChildRule::Stop,
    }
}
