//! Per-node HTML emission rules
//!
//! Containers emit `<tag {settings}style="{styles}">{content}</tag>` where:
//!
//! - `settings` concatenates the attribute children's emissions (each ends
//!   with a trailing space, so attributes self-separate)
//! - `styles` concatenates the resolved fragments of the container's direct
//!   style children, in document order, with no deduplication
//! - `content` is the container-specific body (divs emit every child except
//!   styles and classes; headers and inputs emit text children only)
//!
//! Text values are emitted verbatim; strut does no HTML escaping.

use std::fmt;

use crate::ast::{AstNode, NodeType};
use crate::codegen::styles::resolve_style;

/// Errors that can occur during code generation
///
/// The emitter is total over any tree the parser can produce; this fires only
/// on hand-built malformed trees where a value-carrying leaf has no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A leaf node of this type carried no value
    MissingValue(NodeType),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::MissingValue(node_type) => {
                write!(f, "Node {} has no value to emit", node_type)
            }
        }
    }
}

impl std::error::Error for GenError {}

/// Generate the HTML string for a tree.
pub fn generate(ast: &AstNode) -> Result<String, GenError> {
    emit_node(ast)
}

fn emit_node(node: &AstNode) -> Result<String, GenError> {
    match node.node_type {
        NodeType::Block => {
            let mut output = String::new();
            for child in &node.children {
                output.push_str(&emit_node(child)?);
            }
            Ok(output)
        }
        NodeType::Div => {
            let settings = emit_matching(node, |t| t == NodeType::Class)?;
            let content =
                emit_matching(node, |t| t != NodeType::Style && t != NodeType::Class)?;
            Ok(emit_element("div", &settings, &hoisted_styles(node)?, &content))
        }
        NodeType::Header => {
            let settings = emit_matching(node, |t| t != NodeType::Text)?;
            let content = emit_matching(node, |t| t == NodeType::Text)?;
            Ok(emit_element("header", &settings, &hoisted_styles(node)?, &content))
        }
        NodeType::Input => {
            let settings = emit_matching(node, |t| t != NodeType::Text)?;
            let content = emit_matching(node, |t| t == NodeType::Text)?;
            Ok(emit_element("input", &settings, &hoisted_styles(node)?, &content))
        }
        // Styles are hoisted into the parent's style attribute.
        NodeType::Style => Ok(String::new()),
        NodeType::StyleItem => Ok(resolve_style(leaf_value(node)?).to_string()),
        NodeType::Text => Ok(leaf_value(node)?.to_string()),
        NodeType::Placeholder => Ok(format!("placeholder=\"{}\" ", leaf_value(node)?)),
        NodeType::Class => Ok(format!("class=\"{}\" ", leaf_value(node)?)),
    }
}

/// Concatenated emissions of the direct children whose type passes `keep`,
/// in document order.
fn emit_matching(
    node: &AstNode,
    keep: impl Fn(NodeType) -> bool,
) -> Result<String, GenError> {
    let mut output = String::new();
    for child in node.children.iter().filter(|c| keep(c.node_type)) {
        output.push_str(&emit_node(child)?);
    }
    Ok(output)
}

/// Resolved style fragments from a container's direct style children.
fn hoisted_styles(node: &AstNode) -> Result<String, GenError> {
    let mut styles = String::new();
    for style in node.children_of_type(NodeType::Style) {
        for item in &style.children {
            styles.push_str(resolve_style(leaf_value(item)?));
        }
    }
    Ok(styles)
}

fn emit_element(tag: &str, settings: &str, styles: &str, content: &str) -> String {
    format!("<{tag} {settings}style=\"{styles}\">{content}</{tag}>")
}

fn leaf_value(node: &AstNode) -> Result<&str, GenError> {
    node.value
        .as_deref()
        .ok_or(GenError::MissingValue(node.node_type))
}
