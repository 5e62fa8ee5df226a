//! AST types for the strut format
//!
//! The parser produces a single tree of [AstNode] values rooted at a
//! [NodeType::Block] node. Nodes exclusively own their children; the tree is
//! acyclic and single-parent. It is built bottom-up during parsing, immutable
//! afterwards, and discarded after code generation.

pub mod node;
pub mod tag;

pub use node::{AstNode, NodeType};
pub use tag::serialize_tag;
