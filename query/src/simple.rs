//! Non-recursive statement builders.
//!
//! Each builder is a pure function from (tokens, columns) to a
//! [`Statement`]; execution and result handling stay with the dispatcher.
//! Values are bound; identifiers are interpolated only after validation.
//! The trailing fragments some commands accept are spliced verbatim — that
//! is the documented trust boundary of this layer.

use std::sync::LazyLock;

use drillsql_core::{CommandError, Result, SqlValue, Statement, TableRef};
use regex::Regex;

static DISTINCT_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\w+(\s+"?\w+"?)+$"#).expect("static regex must compile"));

/// Parses a numeric anchor token.
pub(crate) fn parse_anchor(token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| CommandError::Argument(format!("expected a numeric id, got '{token}'")))
}

/// `\d` — describe: a `show create table` passthrough.
pub fn describe(table: &TableRef) -> Statement {
    Statement::new(format!("show create table {}", table.qualified()))
}

/// `\do` — single-row fetch.
///
/// No anchor browses the first 100 rows; one numeric anchor filters on
/// `id`.
///
/// # Errors
///
/// Returns [`CommandError::Argument`] for more than one anchor token or a
/// non-numeric anchor.
pub fn fetch_row(table: &TableRef, anchors: &[String]) -> Result<Statement> {
    match anchors {
        [] => Ok(Statement::new(format!(
            "select * from {} limit 100",
            table.qualified()
        ))),
        [anchor] => {
            let id = parse_anchor(anchor)?;
            Ok(Statement::with_params(
                format!("select * from {} where id = ?", table.qualified()),
                vec![SqlValue::Int(id)],
            ))
        }
        _ => Err(CommandError::Argument(
            "expected at most one row id".to_string(),
        )),
    }
}

/// `\gcol` — column listing from `information_schema.columns`.
///
/// The schema filter defaults to the current database unless the table
/// argument carried a qualifier; both the table name and the qualifier are
/// bound values.
pub fn list_columns(table: &TableRef) -> Statement {
    let mut params = vec![SqlValue::Text(table.table.clone())];
    let schema_filter = match &table.schema {
        Some(schema) => {
            params.push(SqlValue::Text(schema.clone()));
            "(table_schema = ?)"
        }
        None => "(table_schema = database())",
    };
    let sql = format!(
        "select\n    \
             column_name as name,\n    \
             data_type as type\n\
         from information_schema.columns\n\
         where table_name = ? and {schema_filter}\n\
         order by ordinal_position"
    );
    Statement::with_params(sql, params)
}

/// `\dc` — distinct-count grouping.
///
/// The argument must match `table col [col ...]`, where each column may be
/// double-quoted. The grammar is checked before any query is issued.
///
/// # Errors
///
/// Returns [`CommandError::Argument`] for any deviation from the grammar.
pub fn distinct_count(raw: &str) -> Result<Statement> {
    let raw = raw.trim();
    if !DISTINCT_COUNT_RE.is_match(raw) {
        return Err(CommandError::Argument(
            r"invalid pattern, should be \dc table [columns]..".to_string(),
        ));
    }
    let mut tokens = raw.split_whitespace();
    // The grammar guarantees a bare-identifier table and at least one column.
    let table = tokens.next().unwrap_or_default();
    let cols = tokens.collect::<Vec<_>>().join(", ");
    Ok(Statement::new(format!(
        "select {cols}, count(*) as cnt from {table} group by {cols} order by {cols}"
    )))
}

/// `\ss` without an argument — list available schemas.
pub fn list_schemas() -> Statement {
    Statement::new("SELECT schema_name FROM information_schema.schemata")
}

/// `\ss schema` — session-scoped schema switch.
///
/// # Errors
///
/// Returns [`CommandError::Argument`] if the schema name fails identifier
/// validation.
pub fn switch_schema(schema: &str) -> Result<Statement> {
    drillsql_core::validate_identifier(schema)?;
    Ok(Statement::new(format!("use {schema}")))
}

/// `\lt` — bulk file load.
///
/// The path is interpolated as a quoted literal: the grammar excludes
/// quote characters from the path, and the load statement cannot carry a
/// placeholder there in the text protocol.
///
/// # Errors
///
/// Returns [`CommandError::Argument`] when the argument does not match
/// `'<path>' <table>`.
pub fn load_table(raw: &str) -> Result<Statement> {
    let (path, table) = drillsql_core::tokenize_load(raw)?;
    Ok(Statement::new(format!(
        "load data local infile '{path}'\n\
         into table {table}\n\
         fields terminated by ',' enclosed by '\"'\n\
         escaped by '' lines terminated by '\\n'\n\
         ignore 1 lines"
    )))
}
