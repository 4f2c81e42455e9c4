//! Command handlers.
//!
//! One handler per command token. Every handler follows the same
//! synchronous pipeline: tokenize the argument, introspect columns where
//! the shape needs them, synthesize the statement, execute it, normalize
//! the cursor output. No handler catches database errors; all four error
//! classes propagate to the dispatcher's caller.

use drillsql_core::{
    CommandError, CommandResult, Cursor, Result, Statement, TableRef, tokenize,
};
use drillsql_query as query;
use tracing::debug;

use crate::context::Context;
use crate::normalize::results_from_cursor;

fn run(cursor: &mut dyn Cursor, stmt: &Statement) -> Result<()> {
    debug!(sql = %stmt.sql, params = stmt.params.len(), "executing synthesized statement");
    cursor.execute(&stmt.sql, &stmt.params)
}

fn table_arg(tokens: &[String], usage: &str) -> Result<TableRef> {
    let first = tokens
        .first()
        .ok_or_else(|| CommandError::Argument(format!("missing table, usage: {usage}")))?;
    TableRef::parse(first)
}

fn second_arg<'a>(tokens: &'a [String], what: &str, usage: &str) -> Result<&'a str> {
    tokens
        .get(1)
        .map(String::as_str)
        .ok_or_else(|| CommandError::Argument(format!("missing {what}, usage: {usage}")))
}

/// `\d` — describe via `show create table`.
pub(crate) fn describe(
    _ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let tokens = tokenize(arg);
    let table = table_arg(&tokens.tokens, r"\d <table>")?;
    run(cursor, &query::describe(&table))?;
    results_from_cursor(cursor)
}

/// `\do` — fetch one row by id, or browse the first 100.
pub(crate) fn fetch_one(
    _ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let tokens = tokenize(arg);
    let table = table_arg(&tokens.tokens, r"\do <table> [id]")?;
    let stmt = query::fetch_row(&table, &tokens.tokens[1..])?;
    run(cursor, &stmt)?;
    results_from_cursor(cursor)
}

/// `\du` — ancestor walk.
pub(crate) fn drill_up(
    ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let tokens = tokenize(arg);
    let usage = r"\du <table> <id> [trailing]";
    let table = table_arg(&tokens.tokens, usage)?;
    let anchor = second_arg(&tokens.tokens, "row id", usage)?.to_string();
    let cols = query::table_columns(cursor, &table, ctx.settings)?;
    let stmt = query::ancestors(&table, &anchor, &cols, &tokens.tokens[2..])?;
    run(cursor, &stmt)?;
    results_from_cursor(cursor)
}

/// `\dd` — child listing.
pub(crate) fn drill_down(
    ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let tokens = tokenize(arg);
    let usage = r"\dd <table> <id> [where ...]";
    let table = table_arg(&tokens.tokens, usage)?;
    let anchor = second_arg(&tokens.tokens, "row id", usage)?.to_string();
    let cols = query::table_columns(cursor, &table, ctx.settings)?;
    let stmt = query::children(&table, &anchor, &cols, &tokens.tokens[2..])?;
    run(cursor, &stmt)?;
    results_from_cursor(cursor)
}

/// `\ddr` — recursive descendant walk.
pub(crate) fn drill_down_recursive(
    ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let tokens = tokenize(arg);
    let usage = r"\ddr <table> <id> [where ...]";
    let table = table_arg(&tokens.tokens, usage)?;
    let anchor = second_arg(&tokens.tokens, "row id", usage)?.to_string();
    let cols = query::table_columns(cursor, &table, ctx.settings)?;
    let stmt = query::descendants(&table, &anchor, &cols, &tokens.tokens[2..])?;
    run(cursor, &stmt)?;
    results_from_cursor(cursor)
}

/// `\dk` — coded-path descendant walk.
pub(crate) fn drill_down_coded(
    ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let tokens = tokenize(arg);
    let usage = r"\dk <table> <code.path> [where ...]";
    let table = table_arg(&tokens.tokens, usage)?;
    let path = second_arg(&tokens.tokens, "code path", usage)?.to_string();
    let cols = query::table_columns(cursor, &table, ctx.settings)?;
    let stmt = query::coded_path(&table, &path, &cols, &tokens.tokens[2..])?;
    run(cursor, &stmt)?;
    results_from_cursor(cursor)
}

/// `\tree` — depth-grouped tree summary.
pub(crate) fn tree(
    _ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let tokens = tokenize(arg);
    let table = table_arg(&tokens.tokens, r"\tree <table> [root_id]")?;
    let stmt = query::tree_summary(&table, &tokens.tokens[1..])?;
    run(cursor, &stmt)?;
    results_from_cursor(cursor)
}

/// `\gcol` — column listing from `information_schema`.
pub(crate) fn get_columns(
    _ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let tokens = tokenize(arg);
    let table = table_arg(&tokens.tokens, r"\gcol [schema.]<table>")?;
    run(cursor, &query::list_columns(&table))?;
    results_from_cursor(cursor)
}

/// `\dc` — distinct-count grouping.
pub(crate) fn distinct_count(
    _ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let stmt = query::distinct_count(arg)?;
    run(cursor, &stmt)?;
    results_from_cursor(cursor)
}

/// `\lt` — bulk file load, reporting the affected-row count.
pub(crate) fn load_table(
    _ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let stmt = query::load_table(arg)?;
    run(cursor, &stmt)?;
    let status = format!("Query OK, {} rows affected", cursor.row_count());
    Ok(vec![CommandResult::with_status(status)])
}

/// `\ss` — list schemas, or switch the session schema.
pub(crate) fn select_schema(
    _ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let tokens = tokenize(arg);
    match tokens.tokens.as_slice() {
        [] => {
            run(cursor, &query::list_schemas())?;
            results_from_cursor(cursor)
        }
        [schema] => {
            let stmt = query::switch_schema(schema)?;
            run(cursor, &stmt)?;
            Ok(vec![CommandResult::empty()])
        }
        _ => Err(CommandError::Argument(
            r"expected at most one schema, usage: \ss [schema]".to_string(),
        )),
    }
}

/// `\sct` — extract the create statement and hand it to the viewer.
pub(crate) fn show_create(
    ctx: &mut Context<'_>,
    cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let tokens = tokenize(arg);
    let table = table_arg(&tokens.tokens, r"\sct <table>")?;
    run(cursor, &query::describe(&table))?;

    let headers = cursor
        .description()
        .ok_or_else(|| CommandError::NotFound("no create table or view found".to_string()))?;
    let rows = cursor.fetch_all()?;
    let idx = headers
        .iter()
        .position(|h| h == "Create Table")
        .or_else(|| headers.iter().position(|h| h == "Create View"))
        .ok_or_else(|| CommandError::NotFound("no create table or view found".to_string()))?;
    let content = rows
        .first()
        .and_then(|row| row.get(idx))
        .cloned()
        .flatten()
        .ok_or_else(|| CommandError::NotFound("empty create statement".to_string()))?;

    ctx.viewer.view(&table.qualified(), &content)?;
    Ok(vec![CommandResult::empty()])
}

/// `\df` — apply a named output-configuration recipe.
///
/// Unrecognized recipe names report a status message rather than failing.
pub(crate) fn directed_format(
    ctx: &mut Context<'_>,
    _cursor: &mut dyn Cursor,
    arg: &str,
) -> Result<Vec<CommandResult>> {
    let recipe = {
        let trimmed = arg.trim();
        if trimmed.is_empty() {
            "A".to_string()
        } else {
            trimmed.to_uppercase()
        }
    };

    match recipe.as_str() {
        "A" => {
            ctx.output.set_pager_command("visidata-db");
            ctx.output.set_pager_enabled(true);
            ctx.output.set_format("csv")?;
            Ok(vec![CommandResult::with_status(
                "Directed format A: pager=visidata-db, format=csv",
            )])
        }
        "C" => {
            ctx.output.set_pager_enabled(false);
            ctx.output.set_format("ascii")?;
            Ok(vec![CommandResult::with_status(
                "Directed format C: pager=disabled, format=ascii",
            )])
        }
        other => Ok(vec![CommandResult::with_status(format!(
            "Unknown recipe '{other}'. Use A or C."
        ))]),
    }
}
