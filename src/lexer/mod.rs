//! Lexical analysis module.
//!
//! This module contains the lexer that turns source text into tokens on
//! demand for the parser. It handles:
//!
//! - Whitespace skipping
//! - Recognition of keywords, identifiers and integer literals
//! - Single-character punctuation
//! - Illegal characters, which become `Illegal` tokens instead of errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
