use std::fmt::Display;

use super::errors::Error;

/// Append-only, ordered record of the diagnostics of one parse.
///
/// The parser only ever pushes; callers read the sequence once parsing is
/// done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    errors: Vec<Error>,
}

impl Errors {
    pub fn new() -> Self {
        Errors { errors: vec![] }
    }

    pub fn add_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// The recorded diagnostics rendered as messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Emits every diagnostic to `write`, one call per diagnostic.
    pub fn write_lines<F: FnMut(&str)>(&self, mut write: F) {
        for error in &self.errors {
            write(&error.to_string());
        }
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }

        Ok(())
    }
}
