//! Unified error handling for Ribgen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors. Every error carries a stable machine-usable kind and the process
//! exit code the CLI should use when it is the one reported.
//!
//! | Kind                                   | Exit code |
//! |----------------------------------------|-----------|
//! | `lackOfArguments`, `missingOption`     | 2         |
//! | `failedCreateDirectory`                | 3         |
//! | `failedCreateFile`, `templateNotFound` | 4         |
//! | `failedEditFile`, `filesystem`         | 5         |
//! | `builderNotFound`                      | 6         |
//! | `outlineNotFound`, `outlineUnreadable`, `malformedOutline` | 7 |
//! | `indexFailed`                          | 8         |
//!
//! Exit code 1 is reserved for settings failures, which the CLI owns.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Ribgen Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RibgenError {
    /// Errors from the domain layer (argument and outline parsing).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (generation and ports).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl RibgenError {
    /// Stable identifier for scripts and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Domain(e) => match e {
                DomainError::LackOfArguments => "lackOfArguments",
                DomainError::MissingOption { .. } => "missingOption",
                DomainError::MixedIndentation { .. } | DomainError::DuplicateComponent { .. } => {
                    "malformedOutline"
                }
            },
            Self::Application(e) => match e {
                ApplicationError::FailedCreateDirectory { .. } => "failedCreateDirectory",
                ApplicationError::FailedCreateFile { .. } => "failedCreateFile",
                ApplicationError::FailedEditFile { .. } => "failedEditFile",
                ApplicationError::BuilderNotFound { .. } => "builderNotFound",
                ApplicationError::Filesystem { .. } => "filesystem",
                ApplicationError::TemplateNotFound { .. } => "templateNotFound",
                ApplicationError::IndexFailed { .. } => "indexFailed",
                ApplicationError::OutlineNotFound { .. } => "outlineNotFound",
                ApplicationError::OutlineUnreadable { .. } => "outlineUnreadable",
            },
        }
    }

    /// Process exit code when this error is the one reported.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            "lackOfArguments" | "missingOption" => 2,
            "failedCreateDirectory" => 3,
            "failedCreateFile" | "templateNotFound" => 4,
            "failedEditFile" | "filesystem" => 5,
            "builderNotFound" => 6,
            "outlineNotFound" | "outlineUnreadable" | "malformedOutline" => 7,
            "indexFailed" => 8,
            _ => 1,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Argument => ErrorCategory::Argument,
                crate::domain::ErrorCategory::Outline => ErrorCategory::Outline,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Outline and argument errors abort the run; generation errors do not.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Argument | ErrorCategory::Outline
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Outline,
    NotFound,
    Filesystem,
}

/// Convenient result type alias.
pub type RibgenResult<T> = Result<T, RibgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn kinds_and_exit_codes() {
        let err: RibgenError = DomainError::LackOfArguments.into();
        assert_eq!(err.kind(), "lackOfArguments");
        assert_eq!(err.exit_code(), 2);
        assert!(err.is_fatal());

        let err: RibgenError = ApplicationError::FailedCreateDirectory {
            path: PathBuf::from("x"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.kind(), "failedCreateDirectory");
        assert_eq!(err.exit_code(), 3);
        assert!(!err.is_fatal());

        let err: RibgenError = ApplicationError::OutlineNotFound {
            path: PathBuf::from("tree.md"),
        }
        .into();
        assert_eq!(err.exit_code(), 7);
        assert!(err.is_fatal());
    }

    #[test]
    fn display_is_transparent() {
        let err: RibgenError = DomainError::MixedIndentation { line: 4 }.into();
        assert_eq!(
            err.to_string(),
            "Outline line 4: tab characters are not allowed in indentation"
        );
    }
}
