//! Backslash-command layer for hierarchy drilling in interactive SQL
//! clients.
//!
//! This crate wires the query synthesizer into a dispatchable command
//! family:
//!
//! - [`Registry`] — the static command table with per-entry metadata,
//!   `dispatch`, and the `is_member` predicate for shell prefix routing.
//! - [`Context`], [`OutputControl`], [`StatementViewer`] — the
//!   collaborator seams the handlers drive.
//! - [`results_from_cursor`] — the uniform result normalization.
//! - [`suggest`] — database-free completion mirroring each command's
//!   argument grammar.
//!
//! # Example
//!
//! ```no_run
//! use drillsql_commands::{Context, FileStagingViewer, OutputControl, Registry};
//! use drillsql_core::{Cursor, Result, Settings};
//!
//! struct ShellOutput;
//! impl OutputControl for ShellOutput {
//!     fn set_pager_enabled(&mut self, _enabled: bool) {}
//!     fn set_pager_command(&mut self, _command: &str) {}
//!     fn set_format(&mut self, _format: &str) -> Result<()> { Ok(()) }
//! }
//!
//! fn on_special(cursor: &mut dyn Cursor, line: &str) -> Result<()> {
//!     let registry = Registry::standard();
//!     let settings = Settings::from_env();
//!     let mut output = ShellOutput;
//!     let mut viewer = FileStagingViewer::new("/tmp/sct_query.sql");
//!     let mut ctx = Context {
//!         settings: &settings,
//!         output: &mut output,
//!         viewer: &mut viewer,
//!     };
//!     let (token, arg) = line.split_once(' ').unwrap_or((line, ""));
//!     if registry.is_member(token) {
//!         let results = registry.dispatch(token, &mut ctx, cursor, arg)?;
//!         println!("{} result tuple(s)", results.len());
//!     }
//!     Ok(())
//! }
//! ```

mod complete;
mod context;
mod handlers;
mod normalize;
mod registry;

pub use complete::suggest;
pub use context::{Context, FileStagingViewer, OutputControl, StatementViewer};
pub use normalize::results_from_cursor;
pub use registry::{ArgType, CommandDef, Registry};
