//! Diagnostics produced while parsing.
//!
//! This module defines:
//!
//! - Structured syntax errors with expected/found token kinds
//! - Human-readable tips attached to each error kind
//! - The append-only collector every diagnostic of a parse is recorded in

pub mod collector;
pub mod errors;

#[cfg(test)]
mod tests;
