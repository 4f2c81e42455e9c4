//! Collaborator interfaces the handlers drive.
//!
//! The core never renders output or opens windows itself. The directed
//! format command reconfigures the shell's pager and table format through
//! [`OutputControl`], and the create-statement command hands the extracted
//! text to a [`StatementViewer`]. The embedding shell supplies both.

use std::fs;
use std::path::PathBuf;

use drillsql_core::{CommandError, Result, Settings};

/// Pager and table-format knobs of the embedding shell.
pub trait OutputControl {
    /// Enables or disables the output pager.
    fn set_pager_enabled(&mut self, enabled: bool);

    /// Selects the pager command to run when paging is enabled.
    fn set_pager_command(&mut self, command: &str);

    /// Invokes the shell's output-format command by name (e.g. `csv`,
    /// `ascii`).
    fn set_format(&mut self, format: &str) -> Result<()>;
}

/// Receiver for an extracted create statement.
pub trait StatementViewer {
    /// Presents the create statement for `table` to the user.
    fn view(&mut self, table: &str, create_sql: &str) -> Result<()>;
}

/// A [`StatementViewer`] that stages the statement to a file for an
/// external viewer to pick up.
#[derive(Debug, Clone)]
pub struct FileStagingViewer {
    staging_path: PathBuf,
}

impl FileStagingViewer {
    /// Creates a viewer staging to the given path.
    pub fn new(staging_path: impl Into<PathBuf>) -> Self {
        Self {
            staging_path: staging_path.into(),
        }
    }

    /// The path extracted statements are staged to.
    pub fn staging_path(&self) -> &PathBuf {
        &self.staging_path
    }
}

impl StatementViewer for FileStagingViewer {
    fn view(&mut self, _table: &str, create_sql: &str) -> Result<()> {
        fs::write(&self.staging_path, create_sql).map_err(|e| {
            CommandError::Execution(format!(
                "failed to stage create statement to {}: {e}",
                self.staging_path.display()
            ))
        })
    }
}

/// Per-invocation context handed to every handler.
pub struct Context<'a> {
    /// Process-wide settings (minimal-column policy).
    pub settings: &'a Settings,
    /// Pager/format collaborator.
    pub output: &'a mut dyn OutputControl,
    /// Create-statement collaborator.
    pub viewer: &'a mut dyn StatementViewer,
}
