//! Application layer errors.
//!
//! These errors represent failures in generation and orchestration, not in
//! token or outline parsing. Parsing errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running generation commands or talking to ports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A directory for generated files could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    FailedCreateDirectory { path: PathBuf, reason: String },

    /// A template could not be read or its rendering could not be written.
    #[error("Failed to create file {path}: {reason}")]
    FailedCreateFile { path: PathBuf, reason: String },

    /// An existing source file could not be updated.
    #[error("Failed to edit file {path}: {reason}")]
    FailedEditFile { path: PathBuf, reason: String },

    /// The parent's builder is not among the indexed sources.
    #[error("Builder for '{parent}' not found (looked for {file_name})")]
    BuilderNotFound { parent: String, file_name: String },

    /// Filesystem port failure, before it is attributed to a command.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Template store has no blob under the requested key.
    #[error("Template not found: {key}")]
    TemplateNotFound { key: String },

    /// Listing existing sources failed.
    #[error("Failed to index sources under {root}: {reason}")]
    IndexFailed { root: PathBuf, reason: String },

    /// The outline document does not exist.
    #[error("Outline file not found: {path}")]
    OutlineNotFound { path: PathBuf },

    /// The outline document exists but could not be read.
    #[error("Failed to read outline {path}: {reason}")]
    OutlineUnreadable { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FailedCreateDirectory { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check targetDirectory in .ribgen".into(),
            ],
            Self::FailedCreateFile { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check templateDirectory in .ribgen contains the template".into(),
                "Check that you have write permissions".into(),
            ],
            Self::FailedEditFile { path, .. } => vec![
                format!("Could not update: {}", path.display()),
                "Make sure the builder contains the dependency anchor line".into(),
            ],
            Self::BuilderNotFound { parent, file_name } => vec![
                format!("Create '{}' first: ribgen add {}", parent, parent),
                format!("Or check that {} lives under targetDirectory", file_name),
            ],
            Self::OutlineNotFound { path } => vec![
                format!("No file at {}", path.display()),
                "Pass the outline path relative to the current directory".into(),
            ],
            Self::IndexFailed { root, .. } => vec![
                format!("Could not list sources under {}", root.display()),
                "Check targetDirectory in .ribgen".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OutlineNotFound { .. } | Self::OutlineUnreadable { .. } => ErrorCategory::Outline,
            Self::BuilderNotFound { .. } | Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Filesystem,
        }
    }
}
