//! Core types and contracts for hierarchy drill commands.
//!
//! This crate defines the foundational pieces shared by the query
//! synthesizer and the command dispatcher:
//!
//! - [`CommandError`] — the four-class error taxonomy plus dispatcher
//!   lookup failures.
//! - [`TableRef`] / [`validate_identifier`] — allow-list identifier
//!   handling for the positions SQL placeholders cannot cover.
//! - [`tokenize`] / [`tokenize_load`] — the argument grammars, including
//!   the separator-state flag the completion resolver depends on.
//! - [`Statement`] and [`Cursor`] — the synthesized-SQL carrier and the
//!   cursor capability consumed from the embedding client.
//! - [`CommandResult`] and [`Suggestion`] — the display-agnostic outputs
//!   handed back to the shell.
//!
//! # Example
//!
//! ```
//! use drillsql_core::{TableRef, tokenize};
//!
//! let args = tokenize("geo.regions 42 where level = 'city'");
//! let table = TableRef::parse(&args.tokens[0]).unwrap();
//! assert_eq!(table.schema.as_deref(), Some("geo"));
//! assert_eq!(args.tokens[1], "42");
//! ```

mod args;
mod cursor;
mod error;
mod ident;
mod types;

pub use args::{ArgTokens, tokenize, tokenize_load};
pub use cursor::{Cursor, Statement};
pub use error::{CommandError, Result};
pub use ident::{TableRef, validate_identifier};
pub use types::{
    CommandResult, MINIMAL_COLUMNS, MINIMAL_COLUMNS_ENV, MINIMAL_COLUMNS_ENV_LEGACY, Row, Settings,
    SqlValue, Suggestion,
};
