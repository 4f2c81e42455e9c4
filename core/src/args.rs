//! Argument tokenization for drill commands.
//!
//! Most commands split their free-text argument on runs of whitespace. The
//! bulk-load command is the exception: its grammar is `'<quoted-path>'
//! <table>` and the quoted span must survive as one token, so it gets a
//! dedicated pattern.
//!
//! The tokenizer also reports whether the raw argument ends in a
//! separating space. The completion resolver needs that bit to tell "the
//! first token is complete, expecting more" apart from "the first token is
//! still being typed".

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CommandError, Result};

static LOAD_ARGS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^'([^']+)'\s+(\w+)$").expect("static regex must compile"));

/// Tokenized command argument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgTokens {
    /// Whitespace-separated tokens, in input order.
    pub tokens: Vec<String>,
    /// Whether the raw argument ended in a separating space.
    pub trailing_separator: bool,
}

impl ArgTokens {
    /// Whether no token has been typed at all.
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the user is still typing the first token.
    pub fn first_token_in_progress(&self) -> bool {
        self.tokens.len() == 1 && !self.trailing_separator
    }
}

/// Splits a raw argument string on runs of whitespace.
///
/// # Examples
///
/// ```
/// use drillsql_core::tokenize;
///
/// let t = tokenize("orders 42 where x > 1");
/// assert_eq!(t.tokens, ["orders", "42", "where", "x", ">", "1"]);
/// assert!(!t.trailing_separator);
///
/// let t = tokenize("orders ");
/// assert_eq!(t.tokens, ["orders"]);
/// assert!(t.trailing_separator);
/// ```
pub fn tokenize(raw: &str) -> ArgTokens {
    let tokens: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    let trailing_separator = !tokens.is_empty() && raw.ends_with(char::is_whitespace);
    ArgTokens {
        tokens,
        trailing_separator,
    }
}

/// Parses the bulk-load grammar `'<quoted-path>' <table>`.
///
/// Returns the unquoted path and the table name.
///
/// # Errors
///
/// Returns [`CommandError::Argument`] when the argument does not match the
/// grammar, including the unquoted-path case.
///
/// # Examples
///
/// ```
/// use drillsql_core::tokenize_load;
///
/// let (path, table) = tokenize_load("'/tmp/data.csv' widgets").unwrap();
/// assert_eq!(path, "/tmp/data.csv");
/// assert_eq!(table, "widgets");
///
/// assert!(tokenize_load("/tmp/data.csv widgets").is_err());
/// ```
pub fn tokenize_load(raw: &str) -> Result<(String, String)> {
    let caps = LOAD_ARGS_RE.captures(raw.trim()).ok_or_else(|| {
        CommandError::Argument(r"invalid pattern, should be \lt '<path>' <table>".to_string())
    })?;
    Ok((caps[1].to_string(), caps[2].to_string()))
}
