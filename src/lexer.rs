//! Lexer for the strut format
//!
//! This module turns raw source text into the flat token stream consumed by
//! the parser. strut keeps the lexer deliberately simple: there is no
//! indentation tracking and no token carries position information. Structure
//! comes entirely from the keyword tokens (`div:`, `style:`, `text=`, ...)
//! and the parser's per-container rules.
//!
//! Priority Matters
//!
//!     Several patterns overlap. The generic content pattern would happily
//!     swallow `text=hey man` as one run, so the keyword patterns must be
//!     tried first at every scan position. The scanner therefore matches a
//!     single alternation in strict priority order (first alternative wins)
//!     rather than maximal munch. See [scanner] for the full pattern table.
//!
//! Whitespace and newlines are consumed and discarded, never emitted as
//! tokens. Every emitted token's text is trimmed of surrounding whitespace.

pub mod scanner;
pub mod tokens;

pub use scanner::{tokenize, LexError};
pub use tokens::{Token, TokenKind};
