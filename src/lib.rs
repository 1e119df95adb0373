#![allow(clippy::module_inception)]

//! Lexical and syntactic front end for the sena expression language.
//!
//! Source text is scanned by the [`lexer`] one token at a time, the
//! [`parser`] builds an [`ast`] tree from the token stream, and every
//! malformed construct is reported into an [`errors`] collector instead of
//! aborting the parse.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;
