//! Identifier validation and table references.
//!
//! The wire protocols these commands target have no placeholder syntax for
//! identifiers, so table, schema, and column names must be interpolated
//! into SQL text. Every identifier that originates from user input is
//! validated against an allow-listed character class (alphanumerics and
//! underscores) before interpolation. Identifiers reported by live
//! introspection are trusted as-is; that trust boundary is deliberate and
//! callers must not feed free text through it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CommandError, Result};

/// Validates that an identifier contains only alphanumeric characters and
/// underscores.
///
/// # Errors
///
/// Returns [`CommandError::Argument`] if the identifier is empty or
/// contains characters outside the allow-listed class.
pub fn validate_identifier(ident: &str) -> Result<()> {
    if ident.is_empty() {
        return Err(CommandError::Argument("empty identifier".to_string()));
    }
    if !ident.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(CommandError::Argument(format!(
            "invalid identifier '{ident}': must contain only alphanumeric characters and underscores"
        )));
    }
    Ok(())
}

/// A reference to a (possibly schema-qualified) hierarchical table.
///
/// When a schema qualifier is present in user input (`schema.table`), it
/// overrides the session's default schema for introspection and query
/// generation.
///
/// # Examples
///
/// ```
/// use drillsql_core::TableRef;
///
/// let plain = TableRef::parse("regions").unwrap();
/// assert_eq!(plain.schema, None);
/// assert_eq!(plain.qualified(), "regions");
///
/// let qualified = TableRef::parse("geo.regions").unwrap();
/// assert_eq!(qualified.schema.as_deref(), Some("geo"));
/// assert_eq!(qualified.qualified(), "geo.regions");
///
/// assert!(TableRef::parse("regions; drop table x").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    /// Schema qualifier, when the user wrote `schema.table`.
    pub schema: Option<String>,
    /// Bare table name.
    pub table: String,
}

impl TableRef {
    /// Parses `table` or `schema.table` user input, validating both parts.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Argument`] if either part fails identifier
    /// validation.
    pub fn parse(input: &str) -> Result<Self> {
        match input.split_once('.') {
            Some((schema, table)) => {
                validate_identifier(schema)?;
                validate_identifier(table)?;
                Ok(Self {
                    schema: Some(schema.to_string()),
                    table: table.to_string(),
                })
            }
            None => {
                validate_identifier(input)?;
                Ok(Self {
                    schema: None,
                    table: input.to_string(),
                })
            }
        }
    }

    /// The fully qualified name as it appears in synthesized SQL.
    pub fn qualified(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.table),
            None => self.table.clone(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(schema) = &self.schema {
            write!(f, "{schema}.")?;
        }
        f.write_str(&self.table)
    }
}
