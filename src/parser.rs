//! Parser for the strut format
//!
//! A recursive-descent parser over the flat token stream, tracking a single
//! cursor. Each container element (block, div, header, input) has its own
//! allowed-child table in [grammar]; the shared descent loop in [descent]
//! looks up the current token kind in the active container's table and
//! dispatches to the matching sub-parser.
//!
//! The grammar is deliberately permissive. Containers stop at the first token
//! kind their table marks as a stop, and div bodies skip unrecognized tokens
//! one at a time instead of failing. The parser's only hard failure is a
//! setting context (`class=`, `text=`, `placeholder=`) that is not followed
//! by a content token.

pub mod descent;
pub mod grammar;

pub use descent::{parse, ParseError};
pub use grammar::{child_rule, ChildRule};
