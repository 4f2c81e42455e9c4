//! Context-aware completion for drill commands.
//!
//! [`suggest`] is a pure function of (command token, raw argument): it
//! mirrors each command's argument grammar without ever touching the
//! database, and leans on the tokenizer's trailing-separator flag to tell
//! a settled first token apart from one still being typed. The shell
//! resolves the returned descriptors against its own catalogs.

use drillsql_core::{Suggestion, tokenize};

fn tables_and_schemas() -> Vec<Suggestion> {
    vec![Suggestion::Table { schema: None }, Suggestion::Schema]
}

/// Returns the suggestion descriptors for the current argument position.
///
/// Rules are applied in priority order:
///
/// 1. Blank argument: schema switch gets schema suggestions only; every
///    other command gets tables plus schemas.
/// 2. First token still being typed: recipe literals for the directed
///    format command, schemas for the schema switch, schema-scoped tables
///    for a qualified partial, tables plus schemas otherwise.
/// 3. Distinct count past the table token: columns scoped to that table.
/// 4. Walk commands past the table token: the trailing clause is free
///    text, no suggestions.
/// 5. Bulk load past the quoted path: no suggestions.
/// 6. Anything else: no suggestions.
pub fn suggest(command: &str, arg: &str) -> Vec<Suggestion> {
    let tokens = tokenize(arg);

    if tokens.is_blank() {
        return if command == r"\ss" {
            vec![Suggestion::Schema]
        } else {
            tables_and_schemas()
        };
    }

    if tokens.first_token_in_progress() {
        if command == r"\df" {
            return vec![
                Suggestion::Literal { text: "A".to_string() },
                Suggestion::Literal { text: "C".to_string() },
            ];
        }
        if command == r"\ss" {
            return vec![Suggestion::Schema];
        }
        return match tokens.tokens[0].split_once('.') {
            Some((schema, _)) => vec![Suggestion::Table {
                schema: Some(schema.to_string()),
            }],
            None => tables_and_schemas(),
        };
    }

    // The first token is settled; position two or later.
    if command == r"\dc" {
        let (schema, table) = match tokens.tokens[0].split_once('.') {
            Some((schema, table)) => (Some(schema.to_string()), table.to_string()),
            None => (None, tokens.tokens[0].clone()),
        };
        return vec![Suggestion::Column { schema, table }];
    }

    // Walk trailing clauses, the bulk-load table position, and everything
    // else past the first token are free text.
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_schema_switch_suggests_schemas_only() {
        assert_eq!(suggest(r"\ss", ""), vec![Suggestion::Schema]);
        assert_eq!(suggest(r"\ss", "   "), vec![Suggestion::Schema]);
    }

    #[test]
    fn test_blank_walk_suggests_tables_then_schemas() {
        let suggestions = suggest(r"\du", "");
        assert_eq!(
            suggestions,
            vec![Suggestion::Table { schema: None }, Suggestion::Schema]
        );
    }

    #[test]
    fn test_partial_first_token_suggests_tables() {
        let suggestions = suggest(r"\dd", "ord");
        assert_eq!(
            suggestions,
            vec![Suggestion::Table { schema: None }, Suggestion::Schema]
        );
    }

    #[test]
    fn test_qualified_partial_scopes_tables_to_schema() {
        let suggestions = suggest(r"\du", "sales.ord");
        assert_eq!(
            suggestions,
            vec![Suggestion::Table {
                schema: Some("sales".to_string())
            }]
        );
    }

    #[test]
    fn test_schema_switch_partial_stays_on_schemas() {
        assert_eq!(suggest(r"\ss", "sal"), vec![Suggestion::Schema]);
    }

    #[test]
    fn test_distinct_count_settled_table_suggests_columns() {
        let suggestions = suggest(r"\dc", "orders ");
        assert_eq!(
            suggestions,
            vec![Suggestion::Column {
                schema: None,
                table: "orders".to_string()
            }]
        );
    }

    #[test]
    fn test_distinct_count_qualified_table_keeps_schema_scope() {
        let suggestions = suggest(r"\dc", "sales.orders amount ");
        assert_eq!(
            suggestions,
            vec![Suggestion::Column {
                schema: Some("sales".to_string()),
                table: "orders".to_string()
            }]
        );
    }

    #[test]
    fn test_walk_commands_go_silent_past_the_table() {
        assert!(suggest(r"\du", "nodes 42 ").is_empty());
        assert!(suggest(r"\ddr", "nodes 42 where ").is_empty());
        assert!(suggest(r"\tree", "nodes ").is_empty());
    }

    #[test]
    fn test_bulk_load_never_suggests_past_the_path() {
        assert!(suggest(r"\lt", "'/tmp/data.csv' ").is_empty());
        assert!(suggest(r"\lt", "'/tmp/data.csv' wid").is_empty());
    }

    #[test]
    fn test_directed_format_offers_recipe_literals() {
        let suggestions = suggest(r"\df", "a");
        assert_eq!(
            suggestions,
            vec![
                Suggestion::Literal { text: "A".to_string() },
                Suggestion::Literal { text: "C".to_string() },
            ]
        );
        assert!(suggest(r"\df", "A ").is_empty());
    }

    #[test]
    fn test_unknown_positions_yield_nothing() {
        assert!(suggest(r"\d", "widgets extra ").is_empty());
    }
}
