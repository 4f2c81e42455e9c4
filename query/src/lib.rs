//! Query synthesis for hierarchy drill commands.
//!
//! This crate turns parsed command arguments plus live-introspected column
//! lists into parameterized SQL statements:
//!
//! - [`table_columns`] — per-call column introspection with the uniform
//!   minimal-column policy.
//! - [`describe`], [`fetch_row`], [`list_columns`], [`distinct_count`],
//!   [`list_schemas`], [`switch_schema`], [`load_table`] — the
//!   non-recursive shapes.
//! - [`ancestors`], [`children`], [`descendants`], [`coded_path`],
//!   [`tree_summary`] — the recursive-traversal shapes.
//!
//! Builders are pure and never execute anything; execution failures belong
//! to the dispatcher and surface unchanged.
//!
//! # Example
//!
//! ```
//! use drillsql_core::TableRef;
//! use drillsql_query::descendants;
//!
//! let table = TableRef::parse("regions").unwrap();
//! let cols = vec!["id".to_string(), "parent_id".to_string()];
//! let stmt = descendants(&table, "42", &cols, &[]).unwrap();
//! assert!(stmt.sql.starts_with("with recursive cte as ("));
//! assert_eq!(stmt.params.len(), 1);
//! ```

mod introspect;
mod simple;
mod walks;

pub use introspect::table_columns;
pub use simple::{
    describe, distinct_count, fetch_row, list_columns, list_schemas, load_table, switch_schema,
};
pub use walks::{ancestors, children, coded_path, descendants, tree_summary};
