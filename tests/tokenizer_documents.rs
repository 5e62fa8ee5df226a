//! Tokenization tests over whole sample documents
//!
//! These assert the exact token sequence for the verified samples, so any
//! change to pattern priority shows up as a concrete diff.

use strut::lexer::{tokenize, Token, TokenKind};
use strut::testing::StrutSources;

fn lex_sample(name: &str) -> Vec<Token> {
    let source = StrutSources::get(name).expect("missing sample");
    tokenize(source).expect("sample failed to lex")
}

#[test]
fn test_kitchen_sink_token_sequence() {
    let expected = vec![
        Token::new(TokenKind::Div, "div:"),
        Token::new(TokenKind::Class, "class="),
        Token::new(TokenKind::TextContent, "mainDIV"),
        Token::new(TokenKind::Style, "style:"),
        Token::new(TokenKind::TextContent, "flex"),
        Token::new(TokenKind::TextContent, "column"),
        Token::new(TokenKind::TextContent, "center"),
        Token::new(TokenKind::Header, "header:"),
        Token::new(TokenKind::Text, "text="),
        Token::new(TokenKind::TextContent, "hey man"),
        Token::new(TokenKind::Input, "input:"),
        Token::new(TokenKind::Class, "class="),
        Token::new(TokenKind::TextContent, "main"),
        Token::new(TokenKind::Style, "style:"),
        Token::new(TokenKind::TextContent, "flex"),
        Token::new(TokenKind::Text, "text="),
        Token::new(TokenKind::TextContent, "inputhere"),
        Token::new(TokenKind::Placeholder, "placeholder="),
        Token::new(TokenKind::TextContent, "yoo bro"),
    ];
    assert_eq!(lex_sample("kitchen-sink"), expected);
}

#[test]
fn test_header_only_token_sequence() {
    let expected = vec![
        Token::new(TokenKind::Header, "header:"),
        Token::new(TokenKind::Text, "text="),
        Token::new(TokenKind::TextContent, "hey man"),
    ];
    assert_eq!(lex_sample("header-only"), expected);
}

#[test]
fn test_all_samples_lex() {
    for name in StrutSources::names() {
        let tokens = lex_sample(name);
        assert!(!tokens.is_empty(), "sample lexed to nothing: {}", name);
    }
}

#[test]
fn test_tokenization_is_deterministic() {
    let source = StrutSources::get("kitchen-sink").unwrap();
    assert_eq!(tokenize(source), tokenize(source));
}
