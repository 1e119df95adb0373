//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level parsing
//! loop. The parser pulls tokens from the lexer on demand, keeping the
//! current token and one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use tracing::{debug, trace};

use crate::{
    ast::ast::Root,
    errors::{
        collector::Errors,
        errors::{Error, ErrorImpl},
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Receives every diagnostic line as soon as it is recorded.
pub type DiagnosticSink<'a> = Box<dyn FnMut(&str) + 'a>;

/// Deepest expression nesting `parse_expr` accepts before failing the statement.
pub const MAX_NESTING_DEPTH: usize = 256;

fn console_sink(message: &str) {
    println!("{}", message);
}

/// The main parser structure that maintains parsing state.
///
/// A parser is single use: it owns its lexer, and records into the error
/// collector it was given for the duration of one [`Parser::parse`] call.
pub struct Parser<'a> {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    /// The token being examined
    current_token: Token,
    /// One token of lookahead
    next_token: Token,
    /// Collector every diagnostic is appended to
    errors: &'a mut Errors,
    /// Output for diagnostics as they are recorded
    sink: DiagnosticSink<'a>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Number of `parse_expr` calls currently active
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `lexer` - Lexer positioned at the start of the source
    /// * `errors` - Collector the diagnostics of this parse are appended to
    /// * `sink` - Where each diagnostic line is written, stdout when `None`
    ///
    /// # Returns
    ///
    /// A new Parser with its lookup tables registered and the first two
    /// tokens already read.
    pub fn new(mut lexer: Lexer, errors: &'a mut Errors, sink: Option<DiagnosticSink<'a>>) -> Self {
        let current_token = lexer.next_token();
        let next_token = lexer.next_token();

        let sink: DiagnosticSink<'a> = match sink {
            Some(sink) => sink,
            None => Box::new(console_sink),
        };

        let mut parser = Parser {
            lexer,
            current_token,
            next_token,
            errors,
            sink,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn next_token_kind(&self) -> TokenKind {
        self.next_token.kind
    }

    /// Binding power of the current, not yet consumed, token.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.current_token.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let upcoming = self.lexer.next_token();
        let following = mem::replace(&mut self.next_token, upcoming);
        let previous = mem::replace(&mut self.current_token, following);

        trace!(kind = %self.current_token.kind, value = %self.current_token.value, "token");
        previous
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) and advances if the current token matches, otherwise
    /// returns an `UnexpectedToken` error naming both kinds and leaves the
    /// token in place.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: token.kind,
                token: token.value.clone(),
            }));
        }

        Ok(self.advance())
    }

    /// Enters one level of expression nesting, failing past `MAX_NESTING_DEPTH`.
    ///
    /// Every successful call must be paired with [`Parser::exit_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    /// Current expression nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Records a diagnostic and forwards it, with its tip, to the sink.
    pub fn report_error(&mut self, error: Error) {
        (self.sink)(&error.get_report());
        self.errors.add_error(error);
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix handlers do not touch the binding power table, so a token that
    /// is only a prefix operator still ends an infix loop.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until the end of input.
    ///
    /// A statement that fails to parse is dropped whole: its diagnostic is
    /// recorded, one token is skipped so the loop always makes progress, and
    /// parsing resumes. The returned root holds only complete statements.
    pub fn parse(&mut self) -> Root {
        let mut body = vec![];

        while self.current_token_kind() != TokenKind::EOF {
            match parse_stmt(self) {
                Ok(stmt) => body.push(stmt),
                Err(error) => {
                    self.report_error(error);
                    let skipped = self.advance();
                    debug!(kind = %skipped.kind, value = %skipped.value, "dropped statement, skipping token");
                }
            }
        }

        debug!(statements = body.len(), diagnostics = self.errors.len(), "parse finished");
        Root::new(body)
    }
}

/// Parses a source string with a fresh lexer, parser and collector.
///
/// Diagnostics are not echoed anywhere; they are returned alongside the root.
pub fn parse(source: String) -> (Root, Errors) {
    let mut errors = Errors::new();

    let root = {
        let silent: DiagnosticSink = Box::new(|_: &str| {});
        let mut parser = Parser::new(Lexer::new(source), &mut errors, Some(silent));
        parser.parse()
    };

    (root, errors)
}
