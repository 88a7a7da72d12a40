//! CLI error type and exit-status mapping.

use std::io;

use lox_diagnostic::DiagnosticError;
use thiserror::Error;

/// Exit status used when the source had lexical errors.
pub const EXIT_LEXICAL: u8 = 65;

/// Exit status for any other failure.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Render(#[from] DiagnosticError),

    #[error("{count} lexical error(s) found")]
    Lexical { count: usize },
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Lexical { .. } => EXIT_LEXICAL,
            _ => EXIT_FAILURE,
        }
    }
}
