//! Live column introspection.
//!
//! Each traversal command re-queries the table's columns fresh; there is
//! no schema cache. When the minimal-column policy is enabled the reported
//! list is intersected with the fixed useful set, preserving the
//! database's reported order. The policy applies uniformly to every
//! builder that consumes introspected columns.

use drillsql_core::{CommandError, Cursor, MINIMAL_COLUMNS, Result, Settings, TableRef};
use tracing::debug;

/// Returns the ordered column names of `table`, filtered to the minimal
/// set when that policy is enabled.
///
/// Issues a `show fields` round-trip against the live connection.
///
/// # Errors
///
/// Returns [`CommandError::Schema`] if the table does not exist or the
/// describe round-trip fails; the error is not recovered here and
/// propagates to the caller of the traversal command.
pub fn table_columns(
    cursor: &mut dyn Cursor,
    table: &TableRef,
    settings: &Settings,
) -> Result<Vec<String>> {
    let sql = format!("show fields from {}", table.qualified());
    debug!(sql = %sql, "introspecting columns");
    cursor
        .execute(&sql, &[])
        .map_err(|e| CommandError::Schema(e.to_string()))?;
    let rows = cursor
        .fetch_all()
        .map_err(|e| CommandError::Schema(e.to_string()))?;

    let mut columns: Vec<String> = rows
        .into_iter()
        .filter_map(|row| row.into_iter().next().flatten())
        .collect();

    if settings.minimal_columns {
        columns.retain(|c| MINIMAL_COLUMNS.contains(&c.as_str()));
    }

    // Checked after filtering: a minimal-mode table with none of the
    // well-known columns would otherwise produce an empty select list.
    if columns.is_empty() {
        return Err(CommandError::Schema(format!(
            "table '{table}' reported no usable columns"
        )));
    }

    Ok(columns)
}
