//! Executes synthesized traversal statements against a real
//! adjacency-list fixture in an in-memory SQLite database.

use drillsql_core::{CommandError, Cursor, Result, Row, SqlValue, TableRef};
use drillsql_query::{ancestors, children, coded_path, descendants, distinct_count, fetch_row};
use rusqlite::Connection;
use rusqlite::params_from_iter;
use rusqlite::types::ValueRef;

/// Cursor adapter over a rusqlite connection.
struct SqliteCursor {
    conn: Connection,
    headers: Option<Vec<String>>,
    rows: Vec<Row>,
    affected: u64,
}

impl SqliteCursor {
    fn new(conn: Connection) -> Self {
        Self {
            conn,
            headers: None,
            rows: Vec::new(),
            affected: 0,
        }
    }
}

fn bindable(params: &[SqlValue]) -> Vec<rusqlite::types::Value> {
    params
        .iter()
        .map(|p| match p {
            SqlValue::Int(i) => rusqlite::types::Value::Integer(*i),
            SqlValue::Text(s) => rusqlite::types::Value::Text(s.clone()),
        })
        .collect()
}

fn cell(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(format!("{b:?}")),
    }
}

impl Cursor for SqliteCursor {
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| CommandError::Execution(e.to_string()))?;
        if stmt.column_count() == 0 {
            let n = stmt
                .execute(params_from_iter(bindable(params)))
                .map_err(|e| CommandError::Execution(e.to_string()))?;
            self.headers = None;
            self.rows = Vec::new();
            self.affected = n as u64;
            return Ok(());
        }

        let headers: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let width = headers.len();
        let mut fetched = Vec::new();
        let mut rows = stmt
            .query(params_from_iter(bindable(params)))
            .map_err(|e| CommandError::Execution(e.to_string()))?;
        while let Some(row) = rows.next().map_err(|e| CommandError::Execution(e.to_string()))? {
            let mut cells = Vec::with_capacity(width);
            for i in 0..width {
                let value = row
                    .get_ref(i)
                    .map_err(|e| CommandError::Execution(e.to_string()))?;
                cells.push(cell(value));
            }
            fetched.push(cells);
        }
        self.affected = fetched.len() as u64;
        self.headers = Some(headers);
        self.rows = fetched;
        Ok(())
    }

    fn description(&self) -> Option<Vec<String>> {
        self.headers.clone()
    }

    fn fetch_all(&mut self) -> Result<Vec<Row>> {
        Ok(std::mem::take(&mut self.rows))
    }

    fn row_count(&self) -> u64 {
        self.affected
    }
}

/// Chain fixture: 1 -> 2 -> 3 -> 4, with the root parented to 0.
fn chain_fixture() -> SqliteCursor {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "create table nodes (id integer, parent_id integer, kode text, name text);
         insert into nodes values (1, 0, 'A', 'root');
         insert into nodes values (2, 1, 'B', 'mid');
         insert into nodes values (3, 2, 'C', 'deep');
         insert into nodes values (4, 3, 'D', 'leaf');",
    )
    .unwrap();
    SqliteCursor::new(conn)
}

/// Branching fixture with per-level codes.
fn coded_fixture() -> SqliteCursor {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "create table regions (id integer, parent_id integer, kode text, name text);
         insert into regions values (1, 0, 'A', 'alpha');
         insert into regions values (2, 0, 'X', 'other-root');
         insert into regions values (3, 1, 'B', 'beta');
         insert into regions values (4, 1, 'Z', 'sibling');
         insert into regions values (5, 3, 'C', 'gamma');
         insert into regions values (6, 2, 'B', 'decoy');",
    )
    .unwrap();
    SqliteCursor::new(conn)
}

fn ids(rows: &[Row], idx: usize) -> Vec<String> {
    rows.iter()
        .map(|r| r[idx].clone().unwrap_or_default())
        .collect()
}

const COLS: &[&str] = &["id", "parent_id", "name"];

fn cols() -> Vec<String> {
    COLS.iter().map(|s| s.to_string()).collect()
}

#[test]
fn ancestor_walk_returns_root_first() {
    let mut cur = chain_fixture();
    let table = TableRef::parse("nodes").unwrap();
    let stmt = ancestors(&table, "4", &cols(), &[]).unwrap();
    cur.execute(&stmt.sql, &stmt.params).unwrap();
    assert_eq!(
        cur.description().unwrap(),
        vec!["id", "parent_id", "name"]
    );
    let rows = cur.fetch_all().unwrap();
    assert_eq!(ids(&rows, 0), vec!["1", "2", "3", "4"]);
}

#[test]
fn ancestor_walk_honors_trailing_fragment() {
    let mut cur = chain_fixture();
    let table = TableRef::parse("nodes").unwrap();
    let trailing = vec!["where".to_string(), "id".to_string(), ">".to_string(), "2".to_string()];
    let stmt = ancestors(&table, "4", &cols(), &trailing).unwrap();
    cur.execute(&stmt.sql, &stmt.params).unwrap();
    let rows = cur.fetch_all().unwrap();
    assert_eq!(ids(&rows, 0), vec!["3", "4"]);
}

#[test]
fn descendant_walk_orders_by_depth_then_id() {
    let mut cur = chain_fixture();
    let table = TableRef::parse("nodes").unwrap();
    let stmt = descendants(&table, "1", &cols(), &[]).unwrap();
    cur.execute(&stmt.sql, &stmt.params).unwrap();
    let headers = cur.description().unwrap();
    assert_eq!(headers[0], "depth");
    let rows = cur.fetch_all().unwrap();
    assert_eq!(ids(&rows, 0), vec!["0", "1", "2", "3"]);
    assert_eq!(ids(&rows, 1), vec!["1", "2", "3", "4"]);
}

#[test]
fn ancestor_then_descendant_round_trips_without_filter() {
    let table = TableRef::parse("nodes").unwrap();

    let mut cur = chain_fixture();
    let up = ancestors(&table, "4", &cols(), &[]).unwrap();
    cur.execute(&up.sql, &up.params).unwrap();
    let up_rows = cur.fetch_all().unwrap();
    let topmost = up_rows[0][0].clone().unwrap();

    let down = descendants(&table, &topmost, &cols(), &[]).unwrap();
    cur.execute(&down.sql, &down.params).unwrap();
    let down_rows = cur.fetch_all().unwrap();

    // Descendant rows lead with depth; compare the id sets.
    let mut up_ids = ids(&up_rows, 0);
    let mut down_ids = ids(&down_rows, 1);
    up_ids.sort();
    down_ids.sort();
    assert_eq!(up_ids, down_ids);
}

#[test]
fn child_listing_applies_user_predicate() {
    let mut cur = coded_fixture();
    let table = TableRef::parse("regions").unwrap();

    let all = children(&table, "1", &cols(), &[]).unwrap();
    cur.execute(&all.sql, &all.params).unwrap();
    assert_eq!(cur.fetch_all().unwrap().len(), 2);

    let trailing: Vec<String> = ["where", "name", "=", "'beta'"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let filtered = children(&table, "1", &cols(), &trailing).unwrap();
    cur.execute(&filtered.sql, &filtered.params).unwrap();
    let rows = cur.fetch_all().unwrap();
    assert_eq!(ids(&rows, 0), vec!["3"]);
}

#[test]
fn child_listing_with_bare_where_returns_all_children() {
    let mut cur = coded_fixture();
    let table = TableRef::parse("regions").unwrap();
    let trailing = vec!["where".to_string()];
    let stmt = children(&table, "1", &cols(), &trailing).unwrap();
    cur.execute(&stmt.sql, &stmt.params).unwrap();
    let rows = cur.fetch_all().unwrap();
    assert_eq!(ids(&rows, 0), vec!["3", "4"]);
}

#[test]
fn descendant_walk_predicate_prunes_subtrees() {
    let mut cur = coded_fixture();
    let table = TableRef::parse("regions").unwrap();
    let trailing: Vec<String> = ["where", "c.kode", "<>", "'Z'"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let stmt = descendants(&table, "1", &cols(), &trailing).unwrap();
    cur.execute(&stmt.sql, &stmt.params).unwrap();
    let rows = cur.fetch_all().unwrap();
    assert_eq!(ids(&rows, 1), vec!["1", "3", "5"]);
}

#[test]
fn coded_path_walk_matches_codes_per_depth() {
    let mut cur = coded_fixture();
    let table = TableRef::parse("regions").unwrap();
    let path_cols: Vec<String> = ["id", "parent_id", "kode", "name"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let stmt = coded_path(&table, "A.B.C", &path_cols, &[]).unwrap();
    cur.execute(&stmt.sql, &stmt.params).unwrap();
    let headers = cur.description().unwrap();
    assert_eq!(headers[0], "kode_full");
    let rows = cur.fetch_all().unwrap();
    // The decoy 'B' under the 'X' root must not match.
    assert_eq!(ids(&rows, 1), vec!["1", "3", "5"]);
    assert_eq!(ids(&rows, 0), vec!["A", "A.B", "A.B.C"]);
}

#[test]
fn coded_path_walk_dead_ends_on_missing_code() {
    let mut cur = coded_fixture();
    let table = TableRef::parse("regions").unwrap();
    let path_cols: Vec<String> = ["id", "parent_id", "kode"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let stmt = coded_path(&table, "A.Q", &path_cols, &[]).unwrap();
    cur.execute(&stmt.sql, &stmt.params).unwrap();
    let rows = cur.fetch_all().unwrap();
    // Only the depth-0 match survives.
    assert_eq!(rows.len(), 1);
}

#[test]
fn fetch_row_binds_its_anchor() {
    let mut cur = chain_fixture();
    let table = TableRef::parse("nodes").unwrap();
    let stmt = fetch_row(&table, &["3".to_string()]).unwrap();
    cur.execute(&stmt.sql, &stmt.params).unwrap();
    let rows = cur.fetch_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][3].as_deref(), Some("deep"));
}

#[test]
fn distinct_count_groups_and_orders() {
    let mut cur = coded_fixture();
    let stmt = distinct_count("regions kode").unwrap();
    cur.execute(&stmt.sql, &stmt.params).unwrap();
    let rows = cur.fetch_all().unwrap();
    assert_eq!(ids(&rows, 0), vec!["A", "B", "C", "X", "Z"]);
    let b_count = &rows[1];
    assert_eq!(b_count[1].as_deref(), Some("2"));
}
