use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A single recoverable diagnostic.
///
/// Its `Display` output is the one-line message recorded by the collector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixHandler { .. } => "NoPrefixHandler",
            ErrorImpl::InvalidStatement { .. } => "InvalidStatement",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Semicolon,
                token,
                ..
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::CloseParen,
                ..
            } => ErrorTip::Suggestion(String::from("Unclosed `(` in expression")),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::NoPrefixHandler {
                kind: TokenKind::Illegal,
                token,
            } => ErrorTip::Suggestion(format!("Unrecognised character `{}`", token)),
            ErrorImpl::NoPrefixHandler {
                kind: TokenKind::EOF,
                ..
            } => ErrorTip::Suggestion(String::from(
                "Source ended where an expression was expected",
            )),
            ErrorImpl::NoPrefixHandler { token, .. } => {
                ErrorTip::Suggestion(format!("`{}` cannot start an expression", token))
            }
            ErrorImpl::InvalidStatement { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Split the expression with intermediate `let` bindings",
            )),
        }
    }

    /// The message followed by its tip, if any, as written to a diagnostic sink.
    pub fn get_report(&self) -> String {
        match self.get_tip() {
            ErrorTip::None => self.to_string(),
            ErrorTip::Suggestion(tip) => format!("{} ({})", self, tip),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        token: String,
    },
    #[error("no prefix handler for {kind}")]
    NoPrefixHandler { kind: TokenKind, token: String },
    #[error("no statement starts with {kind}")]
    InvalidStatement { kind: TokenKind },
    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
