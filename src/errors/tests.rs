//! Unit tests for error handling.
//!
//! This module contains tests for error naming, messages, tips and the
//! diagnostic collector.

use crate::errors::{
    collector::Errors,
    errors::{Error, ErrorImpl, ErrorTip},
};
use crate::lexer::tokens::TokenKind;

fn unexpected(expected: TokenKind, found: TokenKind, token: &str) -> Error {
    Error::new(ErrorImpl::UnexpectedToken {
        expected,
        found,
        token: token.to_string(),
    })
}

#[test]
fn test_unexpected_token_error() {
    let error = unexpected(TokenKind::Identifier, TokenKind::Assignment, "=");

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "expected Identifier, found Assignment");
}

#[test]
fn test_no_prefix_handler_error() {
    let error = Error::new(ErrorImpl::NoPrefixHandler {
        kind: TokenKind::Semicolon,
        token: ";".to_string(),
    });

    assert_eq!(error.get_error_name(), "NoPrefixHandler");
    assert_eq!(error.to_string(), "no prefix handler for Semicolon");
}

#[test]
fn test_invalid_statement_error() {
    let error = Error::new(ErrorImpl::InvalidStatement {
        kind: TokenKind::CloseParen,
    });

    assert_eq!(error.get_error_name(), "InvalidStatement");
    assert_eq!(error.to_string(), "no statement starts with CloseParen");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_missing_semicolon() {
    let error = unexpected(TokenKind::Semicolon, TokenKind::Identifier, "b");

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("semicolon")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_illegal_character() {
    let error = Error::new(ErrorImpl::NoPrefixHandler {
        kind: TokenKind::Illegal,
        token: "@".to_string(),
    });

    assert_eq!(error.get_tip().to_string(), "Unrecognised character `@`");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_collector_preserves_order() {
    let mut errors = Errors::new();
    assert!(errors.is_empty());

    errors.add_error(unexpected(TokenKind::Identifier, TokenKind::Assignment, "="));
    errors.add_error(Error::new(ErrorImpl::InvalidStatement { kind: TokenKind::EOF }));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.errors()[0].get_error_name(), "UnexpectedToken");
    assert_eq!(
        errors.messages(),
        vec![
            "expected Identifier, found Assignment".to_string(),
            "no statement starts with EOF".to_string(),
        ]
    );
}

#[test]
fn test_collector_keeps_duplicates() {
    let mut errors = Errors::new();
    errors.add_error(Error::new(ErrorImpl::InvalidStatement { kind: TokenKind::Star }));
    errors.add_error(Error::new(ErrorImpl::InvalidStatement { kind: TokenKind::Star }));

    assert_eq!(errors.len(), 2);
}

#[test]
fn test_collector_write_lines() {
    let mut errors = Errors::new();
    errors.add_error(unexpected(TokenKind::Semicolon, TokenKind::EOF, ""));
    errors.add_error(Error::new(ErrorImpl::InvalidStatement { kind: TokenKind::EOF }));

    let mut lines = vec![];
    errors.write_lines(|line| lines.push(line.to_string()));

    assert_eq!(lines, vec!["expected Semicolon, found EOF", "no statement starts with EOF"]);
    assert_eq!(
        errors.to_string(),
        "expected Semicolon, found EOF\nno statement starts with EOF\n"
    );
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 });

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_error_impl(), &ErrorImpl::NestingTooDeep { limit: 256 });
    assert_eq!(error.to_string(), "expression nesting exceeds 256 levels");
}

#[test]
fn test_error_report_appends_tip() {
    let with_tip = unexpected(TokenKind::CloseParen, TokenKind::EOF, "");
    let without_tip = Error::new(ErrorImpl::InvalidStatement { kind: TokenKind::Star });

    assert_eq!(
        with_tip.get_report(),
        "expected CloseParen, found EOF (Unclosed `(` in expression)"
    );
    assert_eq!(without_tip.get_report(), "no statement starts with Star");
}
