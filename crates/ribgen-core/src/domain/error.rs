// ============================================================================
// domain/error.rs - ARGUMENT AND OUTLINE ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported once, logged elsewhere)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Argument Errors
    // ========================================================================
    #[error("Lack of arguments: expected at least a subcommand and a target")]
    LackOfArguments,

    #[error("Missing required option --{option} for '{subcommand}'")]
    MissingOption {
        subcommand: String,
        option: &'static str,
    },

    // ========================================================================
    // Outline Errors
    // ========================================================================
    #[error("Outline line {line}: tab characters are not allowed in indentation")]
    MixedIndentation { line: usize },

    #[error("Outline line {line}: component '{name}' is declared more than once")]
    DuplicateComponent { line: usize, name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LackOfArguments => vec![
                "Usage: ribgen <add|link|scaffold|help|version> <name> [--option value]".into(),
                "Example: ribgen add Profile --parent App".into(),
            ],
            Self::MissingOption { subcommand, option } => vec![
                format!("'{}' needs --{} <Name>", subcommand, option),
                format!("Example: ribgen {} Child --{} App", subcommand, option),
            ],
            Self::MixedIndentation { line } => vec![
                format!("Replace the tabs on line {} with spaces", line),
                "Nesting is detected by comparing raw space counts".into(),
            ],
            Self::DuplicateComponent { name, .. } => vec![
                format!("Remove the second '{}' entry from the outline", name),
                "Each component may appear only once per outline".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LackOfArguments | Self::MissingOption { .. } => ErrorCategory::Argument,
            Self::MixedIndentation { .. } | Self::DuplicateComponent { .. } => {
                ErrorCategory::Outline
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Outline,
}
