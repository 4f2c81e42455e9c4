//! Result normalization.
//!
//! Wraps an executed cursor into the uniform 4-tuple shape. If the
//! statement produced a described result set, headers come from the
//! cursor's description and all rows are fetched; otherwise only an empty
//! status string is populated, keeping the shape uniform across commands.
//! Execution failures must have propagated before this point — the
//! normalizer itself never fails on a missing description.

use drillsql_core::{CommandResult, Cursor, Result};

/// Normalizes the current cursor state into result tuples.
pub fn results_from_cursor(cursor: &mut dyn Cursor) -> Result<Vec<CommandResult>> {
    match cursor.description() {
        Some(headers) => {
            let rows = cursor.fetch_all()?;
            Ok(vec![CommandResult::with_rows(rows, headers)])
        }
        None => Ok(vec![CommandResult::with_status("")]),
    }
}
