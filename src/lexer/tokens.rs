//! Token definitions for the strut format
//!
//! A token is an immutable pair of a [TokenKind] and the trimmed matched
//! substring. Tokens are produced in source order by the scanner and consumed,
//! never mutated, by the parser.

use std::fmt;

/// All token kinds the scanner can emit.
///
/// The keyword kinds correspond one-to-one to literal lexemes in the source
/// (`div:`, `text=`, ...). `Head`, `Title`, `Script`, `Body`, `Link` and
/// `Meta` are lexed but consumed by no parser rule; they act as stop tokens
/// wherever they appear. `Ident` is a documented dead rule: the content
/// pattern has higher priority and always claims identifier-shaped spans
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    /// `div:`
    Div,
    /// `head:`
    Head,
    /// `title=`
    Title,
    /// `script:`
    Script,
    /// `body:`
    Body,
    /// `class=`
    Class,
    /// `link:`
    Link,
    /// `meta:`
    Meta,
    /// `style:`
    Style,
    /// `header:`
    Header,
    /// `text=`
    Text,
    /// `placeholder=`
    Placeholder,
    /// `input:`
    Input,
    /// Any run of characters excluding colon, newline and `#`
    TextContent,
    /// Identifier-shaped run (unreachable, see type docs)
    Ident,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Div => "DIV",
            TokenKind::Head => "HEAD",
            TokenKind::Title => "TITLE",
            TokenKind::Script => "SCRIPT",
            TokenKind::Body => "BODY",
            TokenKind::Class => "CLASS",
            TokenKind::Link => "LINK",
            TokenKind::Meta => "META",
            TokenKind::Style => "STYLE",
            TokenKind::Header => "HEADER",
            TokenKind::Text => "TEXT",
            TokenKind::Placeholder => "PLACEHOLDER",
            TokenKind::Input => "INPUT",
            TokenKind::TextContent => "TEXT_CONTENT",
            TokenKind::Ident => "IDENT",
        };
        write!(f, "{}", name)
    }
}

/// A single lexical unit: a kind plus the trimmed matched text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.text)
    }
}
