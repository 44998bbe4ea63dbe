//! Error handling for the ribgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use ribgen_core::domain::DomainError;
use ribgen_core::error::RibgenError;

// Re-export so callers only need `use crate::error::*`.
pub use ribgen_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Settings errors ────────────────────────────────────────────────────
    /// No settings file where one was expected.
    #[error("Settings file not found: {}", path.display())]
    SettingNotFound { path: PathBuf },

    /// The settings file exists but does not decode into `Settings`.
    #[error("Failed to decode settings {}: {source}", path.display())]
    SettingDecodeFailed {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// A fatal error propagated from `ribgen-core`.
    #[error(transparent)]
    Core(#[from] RibgenError),

    // ── System errors ──────────────────────────────────────────────────────
    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    /// Stable identifier for scripts and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SettingNotFound { .. } => "settingNotFound",
            Self::SettingDecodeFailed { .. } => "settingDecodeFailed",
            Self::Core(core) => core.kind(),
            Self::IoError { .. } => "io",
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SettingNotFound { path } => vec![
                format!("Add {} to the current directory", path.display()),
                "Minimal content: targetDirectory: Sources".into(),
                "Or point at another file with --settings <FILE>".into(),
            ],

            Self::SettingDecodeFailed { .. } => vec![
                "Check the setting values".into(),
                "Keys: targetDirectory (required), templateDirectory, fileExtension, dependencyAnchor"
                    .into(),
            ],

            Self::Core(core) => core.suggestions(),

            Self::IoError { message, .. } => vec![format!("I/O operation failed: {}", message)],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SettingNotFound { .. } | Self::SettingDecodeFailed { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(core) => match core.category() {
                CoreCategory::Argument | CoreCategory::Outline => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Filesystem => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Settings and terminal failures exit with 1; core errors carry their
    /// own code (2 for arguments, 7 for outlines, and so on).
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(core) => core.exit_code(),
            _ => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        output.push_str(&format!("\n{}\n", " failure.".red().bold()));
        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out.push_str("\n failure.\n");
        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(kind = self.kind(), "User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!(kind = self.kind(), "Not found: {}", self),
            ErrorCategory::Configuration => {
                tracing::error!(kind = self.kind(), "Configuration error: {}", self)
            }
            ErrorCategory::Internal => tracing::error!(kind = self.kind(), "Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (arguments, outline).
    UserError,
    /// Resource not found.
    NotFound,
    /// Settings error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribgen_core::application::ApplicationError;
    use std::io;

    #[test]
    fn setting_not_found_exits_one() {
        let err = CliError::SettingNotFound {
            path: PathBuf::from(".ribgen"),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.kind(), "settingNotFound");
        assert!(err.suggestions().iter().any(|s| s.contains("targetDirectory")));
    }

    #[test]
    fn core_errors_keep_their_exit_code() {
        let err: CliError = DomainError::LackOfArguments.into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.category(), ErrorCategory::UserError);

        let err = CliError::Core(
            ApplicationError::OutlineNotFound {
                path: PathBuf::from("tree.md"),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 7);
        assert_eq!(err.kind(), "outlineNotFound");
    }

    #[test]
    fn io_error_is_internal() {
        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::SettingNotFound {
            path: PathBuf::from(".ribgen"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error: Settings file not found: .ribgen"));
        assert!(s.contains("Suggestions:"));
        assert!(s.trim_end().ends_with("failure."));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err: CliError = io::Error::new(io::ErrorKind::Other, "pipe closed").into();
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: pipe closed"));
    }
}
