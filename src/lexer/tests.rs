//! Unit tests for the lexer module.
//!
//! Covers keyword and identifier classification, integer literals,
//! punctuation, whitespace handling, illegal characters and the
//! behaviour at end of input.

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let true false".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::True);
    assert_eq!(tokens[2].kind, TokenKind::False);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_reserved_lookup_is_complete() {
    assert_eq!(RESERVED_LOOKUP.len(), 3);
    assert_eq!(Token::lookup_identifier("let"), TokenKind::Let);
    assert_eq!(Token::lookup_identifier("true"), TokenKind::True);
    assert_eq!(Token::lookup_identifier("false"), TokenKind::False);
    assert_eq!(Token::lookup_identifier("letter"), TokenKind::Identifier);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar _underscore CamelCase lets".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "lets");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("abc123".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "123");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 007 99999999999999999999999".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "007");
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].value, "99999999999999999999999");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("; = + - * / ( )".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Semicolon);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::Plus);
    assert_eq!(tokens[3].kind, TokenKind::Dash);
    assert_eq!(tokens[4].kind, TokenKind::Star);
    assert_eq!(tokens[5].kind, TokenKind::Slash);
    assert_eq!(tokens[6].kind, TokenKind::OpenParen);
    assert_eq!(tokens[7].kind, TokenKind::CloseParen);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
    assert_eq!(tokens[1].value, "=");
}

#[test]
fn test_tokenize_without_whitespace() {
    let tokens = tokenize("let x=-(1+2)*3;".to_string());
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Dash,
            TokenKind::OpenParen,
            TokenKind::Integer,
            TokenKind::Plus,
            TokenKind::Integer,
            TokenKind::CloseParen,
            TokenKind::Star,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_whitespace_is_skipped() {
    let tokens = tokenize(" \t\r\n  x \n\n".to_string());

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_illegal_characters() {
    let tokens = tokenize("a @ # é".to_string());

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].value, "#");
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "é");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x".to_string());

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_empty_source() {
    let tokens = tokenize(String::new());

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_lexer_iterator_stops_before_eof() {
    let values: Vec<String> = Lexer::new("let a = 1;".to_string())
        .map(|token| token.value)
        .collect();

    assert_eq!(values, vec!["let", "a", "=", "1", ";"]);
}

#[test]
fn test_remainder_tracks_cursor() {
    let mut lexer = Lexer::new("abc 12".to_string());
    lexer.next_token();

    assert_eq!(lexer.remainder(), " 12");
    assert_eq!(lexer.at(), ' ');
}
