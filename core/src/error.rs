//! Error types shared across the drill-command crates.
//!
//! Provides a unified error type covering the four failure classes a
//! command invocation can hit, plus dispatcher lookup failures. None of
//! these are recovered internally — a failed introspection round-trip or a
//! failed synthesized statement surfaces to the invoking shell unchanged.

use thiserror::Error;

/// Errors that can occur while parsing, synthesizing, or executing a
/// drill command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Malformed or out-of-grammar argument string. Reported before any
    /// database round-trip.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Schema introspection failed or the target table does not exist.
    #[error("schema error: {0}")]
    Schema(String),

    /// An expected artifact was absent from an otherwise successful
    /// query (e.g., no create-statement column in the result).
    #[error("not found: {0}")]
    NotFound(String),

    /// The synthesized statement failed at the database. Propagated
    /// verbatim, never retried or rewritten.
    #[error("execution error: {0}")]
    Execution(String),

    /// The dispatcher was asked for a command token it does not know.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// Convenience alias for results with [`CommandError`].
pub type Result<T> = std::result::Result<T, CommandError>;
