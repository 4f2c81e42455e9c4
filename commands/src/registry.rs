//! Command registry and dispatcher.
//!
//! The registry is an explicit, statically constructed table built once at
//! process start and passed by reference wherever dispatch happens — there
//! is no load-time registration side effect and no hidden ordering
//! dependency. Token lookup honors each entry's case-sensitivity flag;
//! the drill command family is case-sensitive throughout, but the flag is
//! per-entry so mixed families can share one registry.

use drillsql_core::{CommandError, CommandResult, Cursor, Result};

use crate::context::Context;
use crate::handlers;

/// How the surrounding shell should treat the argument text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// The argument is parsed by the handler's own grammar.
    ParsedQuery,
    /// The argument is passed through untouched.
    RawQuery,
    /// The command takes no argument.
    NoQuery,
}

type Handler = fn(&mut Context<'_>, &mut dyn Cursor, &str) -> Result<Vec<CommandResult>>;

/// One registered command.
pub struct CommandDef {
    /// Command token, including the backslash.
    pub token: &'static str,
    /// Usage line shown in help output.
    pub usage: &'static str,
    /// One-line synopsis.
    pub synopsis: &'static str,
    /// Argument handling tag.
    pub arg_type: ArgType,
    /// Whether token lookup must match case exactly.
    pub case_sensitive: bool,
    handler: Handler,
}

/// The static command table plus dispatch over it.
pub struct Registry {
    commands: Vec<CommandDef>,
}

impl Registry {
    /// Builds the standard drill-command table.
    pub fn standard() -> Self {
        let def = |token, usage, synopsis, handler| CommandDef {
            token,
            usage,
            synopsis,
            arg_type: ArgType::ParsedQuery,
            case_sensitive: true,
            handler,
        };
        Self {
            commands: vec![
                def(r"\d", r"\d [table]", "Describe table", handlers::describe as Handler),
                def(r"\do", r"\do [table] [id]", "Get one row", handlers::fetch_one),
                def(r"\du", r"\du [table] [id]", "Drill up row", handlers::drill_up),
                def(r"\dd", r"\dd [table] [id]", "Drill down row", handlers::drill_down),
                def(
                    r"\ddr",
                    r"\ddr [table] [id]",
                    "Drill down row recursively",
                    handlers::drill_down_recursive,
                ),
                def(r"\dk", r"\dk [table] [kode]", "Drill down kode", handlers::drill_down_coded),
                def(r"\tree", r"\tree [table] [root_id]", "Show tree for a table", handlers::tree),
                def(r"\gcol", r"\gcol <table>", "Get columns", handlers::get_columns),
                def(
                    r"\dc",
                    r"\dc [table] [columns]",
                    "Get distinct count of columns",
                    handlers::distinct_count,
                ),
                def(
                    r"\lt",
                    r"\lt '<path>' <table>",
                    "Load data from file into table",
                    handlers::load_table,
                ),
                def(r"\ss", r"\ss [schema]", "Select schema", handlers::select_schema),
                def(r"\sct", r"\sct [table]", "Show create table", handlers::show_create),
                def(
                    r"\df",
                    r"\df [recipe]",
                    "Directed format - set pager and table format",
                    handlers::directed_format,
                ),
            ],
        }
    }

    /// Looks up a command by token, honoring per-entry case sensitivity.
    pub fn find(&self, token: &str) -> Option<&CommandDef> {
        self.commands.iter().find(|def| {
            if def.case_sensitive {
                def.token == token
            } else {
                def.token.eq_ignore_ascii_case(token)
            }
        })
    }

    /// Whether the token belongs to this command family; used by the
    /// surrounding shell for prefix routing.
    pub fn is_member(&self, token: &str) -> bool {
        self.find(token).is_some()
    }

    /// Dispatches a command invocation.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownCommand`] when the token is not
    /// registered; otherwise the handler's result is passed through
    /// unchanged, including any of the four command error classes.
    pub fn dispatch(
        &self,
        token: &str,
        ctx: &mut Context<'_>,
        cursor: &mut dyn Cursor,
        arg: &str,
    ) -> Result<Vec<CommandResult>> {
        let def = self
            .find(token)
            .ok_or_else(|| CommandError::UnknownCommand(token.to_string()))?;
        (def.handler)(ctx, cursor, arg)
    }

    /// Iterates the registered commands in table order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandDef> {
        self.commands.iter()
    }
}
