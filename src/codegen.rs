//! Code generator for the strut format
//!
//! Walks the AST and produces the HTML string. Two concerns live here:
//!
//! - [styles] - the fixed style keyword table mapping strut keywords to CSS
//!   fragments (`flex` -> `display: flex;`, ...)
//! - [emitter] - the per-node emission rules, including style hoisting: a
//!   container's style fragments are collected into a single `style`
//!   attribute rather than emitted at each style node's tree position.

pub mod emitter;
pub mod styles;

pub use emitter::{generate, GenError};
pub use styles::resolve_style;
