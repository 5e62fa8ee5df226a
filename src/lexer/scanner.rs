//! Scanner implementation for the strut format
//!
//! The scanner matches a single regex alternation built from the token rule
//! table below. The regex engine's leftmost-first semantics give us exactly
//! the discipline the grammar needs: at every scan position the first rule in
//! the table that matches wins, so keyword lexemes beat the generic content
//! run even though the content pattern could also claim them.
//!
//! The rule table is the single source of truth for the lexical grammar.
//! Order is priority; moving a rule changes the language.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::lexer::tokens::{Token, TokenKind};

/// What the scanner does with a matched rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleAction {
    /// Emit a token of the given kind
    Emit(TokenKind),
    /// Consume the match silently (whitespace, newlines)
    Discard,
    /// Abort lexing with an error naming the offending text
    Reject,
}

struct TokenRule {
    /// Capture group name in the combined regex
    name: &'static str,
    pattern: &'static str,
    action: RuleAction,
}

/// The lexical grammar, in strict priority order.
///
/// Keyword rules come first, then the generic content run, then the IDENT
/// rule. IDENT is dead: TEXT_CONTENT matches a superset of its spans at
/// higher priority. It is kept to document the full historical grammar.
static TOKEN_SPECIFICATION: &[TokenRule] = &[
    TokenRule {
        name: "DIV",
        pattern: "div:",
        action: RuleAction::Emit(TokenKind::Div),
    },
    TokenRule {
        name: "HEAD",
        pattern: "head:",
        action: RuleAction::Emit(TokenKind::Head),
    },
    TokenRule {
        name: "TITLE",
        pattern: "title=",
        action: RuleAction::Emit(TokenKind::Title),
    },
    TokenRule {
        name: "SCRIPT",
        pattern: "script:",
        action: RuleAction::Emit(TokenKind::Script),
    },
    TokenRule {
        name: "BODY",
        pattern: "body:",
        action: RuleAction::Emit(TokenKind::Body),
    },
    TokenRule {
        name: "CLASS",
        pattern: "class=",
        action: RuleAction::Emit(TokenKind::Class),
    },
    TokenRule {
        name: "LINK",
        pattern: "link:",
        action: RuleAction::Emit(TokenKind::Link),
    },
    TokenRule {
        name: "META",
        pattern: "meta:",
        action: RuleAction::Emit(TokenKind::Meta),
    },
    TokenRule {
        name: "STYLE",
        pattern: "style:",
        action: RuleAction::Emit(TokenKind::Style),
    },
    TokenRule {
        name: "HEADER",
        pattern: "header:",
        action: RuleAction::Emit(TokenKind::Header),
    },
    TokenRule {
        name: "TEXT",
        pattern: "text=",
        action: RuleAction::Emit(TokenKind::Text),
    },
    TokenRule {
        name: "PLACEHOLDER",
        pattern: "placeholder=",
        action: RuleAction::Emit(TokenKind::Placeholder),
    },
    TokenRule {
        name: "INPUT",
        pattern: "input:",
        action: RuleAction::Emit(TokenKind::Input),
    },
    TokenRule {
        name: "TEXT_CONTENT",
        pattern: r"[^:\n#]+",
        action: RuleAction::Emit(TokenKind::TextContent),
    },
    TokenRule {
        name: "IDENT",
        pattern: "[a-zA-Z_][a-zA-Z0-9_]*",
        action: RuleAction::Emit(TokenKind::Ident),
    },
    TokenRule {
        name: "WHITESPACE",
        pattern: r"\s+",
        action: RuleAction::Discard,
    },
    TokenRule {
        name: "NEWLINE",
        pattern: r"\n",
        action: RuleAction::Discard,
    },
    TokenRule {
        name: "UNKNOWN",
        pattern: ".",
        action: RuleAction::Reject,
    },
];

/// Combined alternation over all rules, compiled once.
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alternation = TOKEN_SPECIFICATION
        .iter()
        .map(|rule| format!("(?P<{}>{})", rule.name, rule.pattern))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("lexical grammar must compile")
});

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character sequence matched none of the recognized patterns
    UnexpectedCharacter(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter(text) => {
                write!(f, "Unexpected character: {}", text)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize strut source into an ordered token sequence.
///
/// Pure function of the input text. Whitespace and newline matches are
/// discarded; every emitted token's text is trimmed. Fails on the first
/// character sequence no rule recognizes.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();

    for caps in TOKEN_REGEX.captures_iter(source) {
        for rule in TOKEN_SPECIFICATION {
            let Some(m) = caps.name(rule.name) else {
                continue;
            };
            match rule.action {
                RuleAction::Emit(kind) => tokens.push(Token::new(kind, m.as_str().trim())),
                RuleAction::Discard => {}
                RuleAction::Reject => {
                    return Err(LexError::UnexpectedCharacter(m.as_str().trim().to_string()))
                }
            }
            break;
        }
    }

    Ok(tokens)
}
