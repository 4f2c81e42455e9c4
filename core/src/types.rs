//! Shared data model for drill-command invocations.
//!
//! Everything here is constructed fresh per command invocation and
//! discarded once the result tuples (or suggestion list) have been handed
//! back to the shell; nothing persists across calls except [`Settings`],
//! which the embedding shell constructs once and passes by reference.

use serde::{Deserialize, Serialize};

/// Column names considered relevant for hierarchy display when full-column
/// output is suppressed.
pub const MINIMAL_COLUMNS: &[&str] = &["id", "parent_id", "level", "kode", "code", "nama", "name"];

/// Environment variable enabling the minimal column set.
pub const MINIMAL_COLUMNS_ENV: &str = "DRILLSQL_MINIMAL_COLUMNS";

/// Legacy environment variable honored for compatibility.
pub const MINIMAL_COLUMNS_ENV_LEGACY: &str = "USE_MINIMAL_COLUMN_SET";

/// Process-wide command settings.
///
/// Built once at shell start and passed by reference into the dispatcher.
/// The minimal-column policy applies uniformly to every traversal builder
/// that consumes introspected columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Restrict introspected columns to [`MINIMAL_COLUMNS`].
    pub minimal_columns: bool,
}

impl Settings {
    /// Reads settings from the environment.
    ///
    /// `DRILLSQL_MINIMAL_COLUMNS=1` enables the minimal column set;
    /// `USE_MINIMAL_COLUMN_SET=1` is honored as a fallback.
    pub fn from_env() -> Self {
        let flag = std::env::var(MINIMAL_COLUMNS_ENV)
            .or_else(|_| std::env::var(MINIMAL_COLUMNS_ENV_LEGACY))
            .map(|v| v == "1")
            .unwrap_or(false);
        Self {
            minimal_columns: flag,
        }
    }
}

/// A value bound into a synthesized statement.
///
/// Values (anchors, codes, name filters) are always carried as bound
/// parameters rather than interpolated text; only validated identifiers
/// are spliced into the SQL itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlValue {
    /// Integer parameter (row ids, root anchors).
    Int(i64),
    /// Text parameter (codes, table/schema name filters).
    Text(String),
}

/// One row of a display-agnostic result set. Cells are `None` for SQL
/// `NULL`.
pub type Row = Vec<Option<String>>;

/// The uniform result tuple every command produces.
///
/// Exactly one of `{rows + headers, status}` is meaningful per response;
/// both are absent only for purely side-effecting commands.
///
/// # Examples
///
/// ```
/// use drillsql_core::CommandResult;
///
/// let r = CommandResult::with_rows(vec![vec![Some("1".into())]], vec!["id".into()]);
/// assert!(r.rows.is_some());
/// assert_eq!(r.status.as_deref(), Some(""));
///
/// let s = CommandResult::with_status("Query OK, 3 rows affected");
/// assert!(s.rows.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CommandResult {
    /// Optional title line rendered above the result.
    pub title: Option<String>,
    /// Fetched rows, when the statement produced a described result set.
    pub rows: Option<Vec<Row>>,
    /// Column headers accompanying `rows`.
    pub headers: Option<Vec<String>>,
    /// Status line; defaults to empty text (not absent) on the no-rows
    /// path so the result shape stays uniform across commands.
    pub status: Option<String>,
}

impl CommandResult {
    /// A result carrying a fetched row set and its headers.
    pub fn with_rows(rows: Vec<Row>, headers: Vec<String>) -> Self {
        Self {
            title: None,
            rows: Some(rows),
            headers: Some(headers),
            status: Some(String::new()),
        }
    }

    /// A result carrying only a status message.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            title: None,
            rows: None,
            headers: None,
            status: Some(status.into()),
        }
    }

    /// The fully-empty tuple for side-effecting commands with no output.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// What kind of identifier the shell should offer to complete next.
///
/// Produced by the completion resolver without touching the database; the
/// shell resolves each descriptor against its own catalog caches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Suggestion {
    /// Complete a table name, optionally scoped to one schema.
    Table {
        /// Restrict candidates to this schema; `None` means the session
        /// default plus unqualified names.
        schema: Option<String>,
    },
    /// Complete a schema name.
    Schema,
    /// Complete a column name scoped to one table.
    Column {
        /// Schema qualifier of the scoping table, if the user wrote one.
        schema: Option<String>,
        /// The scoping table name.
        table: String,
    },
    /// Offer a fixed literal (e.g., a recipe name).
    Literal {
        /// The literal text to offer.
        text: String,
    },
}
