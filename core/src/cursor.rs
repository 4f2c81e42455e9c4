//! The cursor capability consumed from the embedding SQL client.
//!
//! The drill commands never own a connection. They receive a [`Cursor`]
//! for the duration of one invocation, drive it with synthesized
//! statements, and hand the fetched output to the result normalizer.
//! Serializing concurrent invocations against one connection is the
//! caller's responsibility; no retries, timeouts, or keep-alives are
//! applied here.

use crate::error::Result;
use crate::types::{Row, SqlValue};

/// A synthesized SQL statement plus its bound parameter values.
///
/// Builders emit placeholders (`?`) for every value position; identifiers
/// are part of the SQL text after allow-list validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// SQL text with `?` placeholders for values.
    pub sql: String,
    /// Parameter values, in placeholder order.
    pub params: Vec<SqlValue>,
}

impl Statement {
    /// A statement with no bound values.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// A statement with bound values.
    pub fn with_params(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

/// Blocking cursor over a live database connection.
///
/// Implementations map driver failures to
/// [`CommandError::Execution`](crate::CommandError::Execution); the
/// introspector re-wraps those as `Schema` errors for describe-style
/// round-trips.
pub trait Cursor {
    /// Executes one statement, replacing any previously held result set.
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<()>;

    /// Column names of the current result set, or `None` when the last
    /// statement produced no described result (DDL, `use`, loads).
    fn description(&self) -> Option<Vec<String>>;

    /// Fetches all remaining rows of the current result set.
    fn fetch_all(&mut self) -> Result<Vec<Row>>;

    /// Rows affected by the last statement, for status reporting.
    fn row_count(&self) -> u64;
}
