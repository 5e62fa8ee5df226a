//! XML-like AST tag serialization
//!
//! Serializes AST nodes to an XML-like format that directly reflects the tree
//! structure. Used by the processing API's AST stage and by tests that want to
//! assert on tree shape without pattern-matching node values by hand.
//!
//! ## Format
//!
//! - Node type -> tag name (lowercased)
//! - Leaf value -> text content
//! - Children -> nested tags, indented two spaces per level
//!
//! ## Example
//!
//! ```text
//! <block>
//!   <div>
//!     <class>mainDIV</class>
//!     <style>
//!       <style_item>flex</style_item>
//!     </style>
//!   </div>
//! </block>
//! ```

use crate::ast::node::AstNode;

/// Serialize a tree to the tag format.
pub fn serialize_tag(root: &AstNode) -> String {
    let mut output = String::new();
    serialize_node(root, 0, &mut output);
    output
}

fn serialize_node(node: &AstNode, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    let tag = node.node_type.to_string().to_ascii_lowercase();

    if let Some(value) = &node.value {
        output.push_str(&format!("{}<{}>{}</{}>\n", indent, tag, value, tag));
        return;
    }

    if node.children.is_empty() {
        output.push_str(&format!("{}<{}/>\n", indent, tag));
        return;
    }

    output.push_str(&format!("{}<{}>\n", indent, tag));
    for child in &node.children {
        serialize_node(child, indent_level + 1, output);
    }
    output.push_str(&format!("{}</{}>\n", indent, tag));
}
