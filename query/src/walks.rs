//! Recursive traversal builders.
//!
//! Five shapes over adjacency-list tables, each expanding a synthetic
//! depth-annotated table inside a single query:
//!
//! - ancestor walk — child-to-parent, depth from 1, root first
//! - child listing — one non-recursive `parent_id` filter
//! - descendant walk — parent-to-child, depth from 0
//! - coded-path walk — descent constrained by a dot-delimited code path
//! - tree summary — depth-grouped `count(*)` with indented level labels
//!
//! All builders are pure: (tokens, introspected columns) in, [`Statement`]
//! out. Anchors and codes are bound values; the user's trailing fragment
//! is spliced verbatim where the command grammar says it is opaque.

use drillsql_core::{CommandError, Result, SqlValue, Statement, TableRef};

use crate::simple::parse_anchor;

fn prefixed(cols: &[String], alias: &str) -> String {
    cols.iter()
        .map(|c| format!("{alias}.{c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extracts the predicate body from a trailing fragment.
///
/// When the fragment begins with the literal keyword `where`, everything
/// after it becomes the predicate; otherwise the predicate is always-true.
/// A lone `where` with nothing after it also means no filter.
fn predicate(trailing: &[String]) -> String {
    if trailing.first().map(String::as_str) == Some("where") && trailing.len() > 1 {
        trailing[1..].join(" ")
    } else {
        "1=1".to_string()
    }
}

/// `\du` — ancestor walk from the anchor row up to the root.
///
/// Depth counts from 1 at the anchor; ordering by descending depth puts
/// the root first and the anchor last. The trailing tokens are appended
/// verbatim between the CTE select and the generated `order by` (they may
/// carry `order by`/`limit` of their own).
pub fn ancestors(
    table: &TableRef,
    anchor: &str,
    cols: &[String],
    trailing: &[String],
) -> Result<Statement> {
    let id = parse_anchor(anchor)?;
    let t = table.qualified();
    let q_cols = cols.join(", ");
    let qc_cols = prefixed(cols, "c");
    let suffix = if trailing.is_empty() {
        String::new()
    } else {
        format!("{} ", trailing.join(" "))
    };
    let sql = format!(
        "with recursive cte as (\n    \
             select {q_cols}, 1 as depth from {t} where id = ?\n    \
             union all\n    \
             select {qc_cols}, cte.depth + 1 from {t} as c\n    \
             inner join cte on c.id = cte.parent_id\n\
         )\n\
         select {q_cols} from cte {suffix}order by depth desc"
    );
    Ok(Statement::with_params(sql, vec![SqlValue::Int(id)]))
}

/// `\dd` — direct children of the anchor row.
///
/// Combines the `parent_id` filter with an optional user `where` clause.
pub fn children(
    table: &TableRef,
    anchor: &str,
    cols: &[String],
    trailing: &[String],
) -> Result<Statement> {
    let id = parse_anchor(anchor)?;
    let sql = format!(
        "select {q_cols}\n\
         from {t}\n\
         where parent_id = ? and\n    \
             ({pred})",
        q_cols = cols.join(", "),
        t = table.qualified(),
        pred = predicate(trailing),
    );
    Ok(Statement::with_params(sql, vec![SqlValue::Int(id)]))
}

/// `\ddr` — recursive descendant walk from the anchor row.
///
/// Depth counts from 0 at the anchor. The optional `where` fragment is
/// applied to every recursive step, not just the seed, so a filtered-out
/// row prunes its whole subtree. Ordered by (depth, id).
pub fn descendants(
    table: &TableRef,
    anchor: &str,
    cols: &[String],
    trailing: &[String],
) -> Result<Statement> {
    let id = parse_anchor(anchor)?;
    let t = table.qualified();
    let q_cols = cols.join(", ");
    let sql = format!(
        "with recursive cte as (\n    \
             select {q_cols}, 0 as depth from {t} where id = ?\n    \
             union all\n    \
             select {qc_cols}, cte.depth + 1\n    \
             from {t} as c\n    \
             inner join cte on c.parent_id = cte.id\n    \
             where {pred}\n\
         )\n\
         select depth, {q_cols} from cte order by depth, id",
        qc_cols = prefixed(cols, "c"),
        pred = predicate(trailing),
    );
    Ok(Statement::with_params(sql, vec![SqlValue::Int(id)]))
}

/// `\dk` — coded-path descendant walk.
///
/// The anchor is a dot-delimited path of codes (`A.B.C`). A literal lookup
/// table `td` maps each zero-based depth to the expected code; the
/// recursive step joins against it so only the next code in sequence is
/// accepted at the next depth. The walk accumulates the concatenated full
/// path in `kode_full`. A trailing fragment beginning with `where`
/// restricts the base row source for every step.
///
/// # Errors
///
/// Returns [`CommandError::Argument`] when the path has an empty segment.
pub fn coded_path(
    table: &TableRef,
    path: &str,
    cols: &[String],
    trailing: &[String],
) -> Result<Statement> {
    let codes: Vec<&str> = path.split('.').collect();
    if codes.iter().any(|c| c.is_empty()) {
        return Err(CommandError::Argument(format!(
            "invalid code path '{path}': empty segment"
        )));
    }

    let t = table.qualified();
    let mut t_source = format!("select * from {t}");
    if trailing.first().map(String::as_str) == Some("where") {
        t_source.push(' ');
        t_source.push_str(&trailing.join(" "));
    }

    // First arm carries the column aliases; later arms are bare.
    let arms = codes
        .iter()
        .enumerate()
        .map(|(depth, _)| {
            if depth == 0 {
                "select 0 as depth, ? as kode".to_string()
            } else {
                format!("select {depth}, ?")
            }
        })
        .collect::<Vec<_>>()
        .join(" union all ");
    let params = codes
        .iter()
        .map(|c| SqlValue::Text((*c).to_string()))
        .collect();

    let q_cols = cols.join(", ");
    let sql = format!(
        "with recursive t_source as (\n    \
             {t_source}\n\
         ), td as (\n    \
             {arms}\n\
         ),\n\
         t as (\n    \
             select {q_cols}, 0 as depth, cast(kode as char(255)) as kode_full\n    \
             from t_source\n    \
             where\n        \
                 parent_id = 0 and\n        \
                 kode = (select kode from td where depth = 0)\n    \
             union all\n    \
             select {qc_cols}, t.depth + 1 as depth, concat(t.kode_full, '.', c.kode) as kode_full\n    \
             from t\n    \
             inner join t_source as c on\n        \
                 c.parent_id = t.id and\n        \
                 c.kode = (select kode from td where depth = t.depth + 1)\n\
         )\n\
         select kode_full, {q_cols} from t\n\
         order by depth, id",
        qc_cols = prefixed(cols, "c"),
    );
    Ok(Statement::with_params(sql, params))
}

/// `\tree` — depth-grouped summary of the hierarchy.
///
/// Starts at the top-level rows (`parent_id = 0`) when no anchor is given,
/// or at one root row. Tracks a concatenated `level_full` key used purely
/// for deterministic ordering of the grouped output; indentation is one
/// `*` per depth.
pub fn tree_summary(table: &TableRef, anchors: &[String]) -> Result<Statement> {
    let (filter, params) = match anchors {
        [] => ("(parent_id = 0)".to_string(), Vec::new()),
        [root] => {
            let id = parse_anchor(root)?;
            ("(id = ?)".to_string(), vec![SqlValue::Int(id)])
        }
        _ => {
            return Err(CommandError::Argument(
                "expected at most one root id".to_string(),
            ));
        }
    };
    let t = table.qualified();
    let sql = format!(
        "with recursive cte as (\n    \
             select id, parent_id,\n    \
             cast(level as char(255)) as level_full,\n    \
             level, 0 as depth\n    \
             from {t}\n    \
             where {filter}\n    \
             union all\n    \
             select t.id, t.parent_id,\n    \
             concat(cte.level_full, '-', t.level) as level_full,\n    \
             t.level, cte.depth + 1\n    \
             from {t} t\n    \
             inner join cte on t.parent_id = cte.id\n\
         )\n\
         select\n    \
             depth,\n    \
             concat(\n        \
                 repeat('*', depth),\n        \
                 case when depth > 0 then ' ' else '' end,\n        \
                 level) as level,\n    \
             count(*) as cnt\n\
         from cte\n\
         group by depth, level\n\
         order by min(level_full)"
    );
    Ok(Statement::with_params(sql, params))
}
