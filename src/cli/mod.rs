//! CLI support for cuanto
//!
//! Provides programmatic access to the assistant's CLI functionality for
//! embedding in other tools (bridges, bots, test harnesses).

mod eval;
mod respond;

pub use eval::execute_eval;
pub use respond::{execute_respond, RespondOptions};

use std::io;

use crate::reply::ArithmeticError;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Expression pipeline error (lexing, parsing, or evaluation)
    Expr(ArithmeticError),
    /// IO error
    Io(io::Error),
    /// No message provided
    NoMessage,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Expr(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoMessage => {
                write!(f, "No message provided. Pass one as an argument or pipe text to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Expr(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArithmeticError> for CliError {
    fn from(e: ArithmeticError) -> Self {
        CliError::Expr(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
