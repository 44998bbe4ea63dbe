//! Generation commands.
//!
//! A command is one idempotent step of a scaffold run. It is built from
//! immutable inputs, including a snapshot of the sources that already exist,
//! and decides at construction time whether there is anything to do. `run()`
//! either performs the step or reports why it was skipped.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::ApplicationError;
use crate::application::ports::{Filesystem, TemplateStore};
use crate::domain::Settings;
use crate::error::RibgenError;

pub mod add_dependency;
pub mod create_component;
pub mod create_extension;
pub mod info;

pub use add_dependency::AddDependency;
pub use create_component::CreateComponent;
pub use create_extension::CreateComponentExtension;
pub use info::{HelpCommand, VersionCommand};

/// Outcome of a single command.
pub type CommandResult = Result<Report, RibgenError>;

/// One step of a scaffold run.
pub trait Command {
    /// Stable identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Perform the step. Never panics on I/O failure.
    fn run(&self) -> CommandResult;
}

/// What a successful command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Created,
    Skipped,
    Edited,
    Info,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Skipped => "skipped",
            Self::Edited => "edited",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Success side of a `CommandResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub message: String,
    pub status: ReportStatus,
}

impl Report {
    pub fn created(message: impl Into<String>) -> Self {
        Self::new(message, ReportStatus::Created)
    }

    pub fn skipped(message: impl Into<String>) -> Self {
        Self::new(message, ReportStatus::Skipped)
    }

    pub fn edited(message: impl Into<String>) -> Self {
        Self::new(message, ReportStatus::Edited)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ReportStatus::Info)
    }

    fn new(message: impl Into<String>, status: ReportStatus) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

/// Borrowed inputs shared by every generation command of a run.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub settings: &'a Settings,
    pub filesystem: &'a dyn Filesystem,
    pub templates: &'a dyn TemplateStore,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        settings: &'a Settings,
        filesystem: &'a dyn Filesystem,
        templates: &'a dyn TemplateStore,
    ) -> Self {
        Self {
            settings,
            filesystem,
            templates,
        }
    }

    /// Create `dir` unless it is already there. An existing directory is not an error.
    pub(crate) fn ensure_dir(&self, dir: &Path) -> Result<(), RibgenError> {
        if self.filesystem.is_dir(dir) {
            tracing::debug!(path = %dir.display(), "Directory exists, skipping creation");
            return Ok(());
        }
        self.filesystem.create_dir_all(dir).map_err(|e| {
            ApplicationError::FailedCreateDirectory {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// First snapshot entry whose file name is exactly `file_name`.
pub(crate) fn find_by_file_name<'s>(snapshot: &'s [PathBuf], file_name: &str) -> Option<&'s Path> {
    snapshot
        .iter()
        .map(PathBuf::as_path)
        .find(|path| path.file_name().is_some_and(|name| name == file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_match_is_exact() {
        let snapshot = vec![
            PathBuf::from("Sources/App/AppBuilder.swift"),
            PathBuf::from("Sources/MyAppBuilder.swift"),
        ];

        let found = find_by_file_name(&snapshot, "AppBuilder.swift");
        assert_eq!(found, Some(Path::new("Sources/App/AppBuilder.swift")));

        assert!(find_by_file_name(&snapshot, "ppBuilder.swift").is_none());
        assert!(find_by_file_name(&snapshot, "App").is_none());
    }

    #[test]
    fn report_constructors_set_status() {
        assert_eq!(Report::created("a").status, ReportStatus::Created);
        assert_eq!(Report::edited("b").status, ReportStatus::Edited);
        assert_eq!(Report::skipped("c").status.to_string(), "skipped");
        assert_eq!(Report::info("d").message, "d");
    }
}
