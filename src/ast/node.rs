//! AST node types
//!
//! A single tagged node type covers the whole tree. Container nodes (`Block`,
//! `Div`, `Header`, `Input`, `Style`) carry children and no value; leaf nodes
//! (`StyleItem`, `Text`, `Placeholder`, `Class`) carry a value and no
//! children.

use std::fmt;

/// The closed set of AST node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum NodeType {
    /// Document root: zero or more top-level elements
    Block,
    Div,
    Header,
    Input,
    /// Style block; children are only `StyleItem`
    Style,
    /// One style keyword inside a style block
    StyleItem,
    Text,
    Placeholder,
    Class,
}

impl NodeType {
    /// Leaf node types carry a value and never have children.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeType::StyleItem | NodeType::Text | NodeType::Placeholder | NodeType::Class
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Block => "BLOCK",
            NodeType::Div => "DIV",
            NodeType::Header => "HEADER",
            NodeType::Input => "INPUT",
            NodeType::Style => "STYLE",
            NodeType::StyleItem => "STYLE_ITEM",
            NodeType::Text => "TEXT",
            NodeType::Placeholder => "PLACEHOLDER",
            NodeType::Class => "CLASS",
        };
        write!(f, "{}", name)
    }
}

/// An owned-recursive AST node.
///
/// Child order is insertion order and is significant: it determines emission
/// order in the generated markup, except where the generator hoists styles.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AstNode {
    pub node_type: NodeType,
    /// Present only on leaf nodes
    pub value: Option<String>,
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// Create a container node with no children yet.
    pub fn branch(node_type: NodeType) -> Self {
        AstNode {
            node_type,
            value: None,
            children: Vec::new(),
        }
    }

    /// Create a value-carrying leaf node.
    pub fn leaf(node_type: NodeType, value: impl Into<String>) -> Self {
        AstNode {
            node_type,
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: AstNode) {
        self.children.push(child);
    }

    /// Direct children of the given type, in document order.
    pub fn children_of_type(&self, node_type: NodeType) -> impl Iterator<Item = &AstNode> {
        self.children
            .iter()
            .filter(move |child| child.node_type == node_type)
    }
}
