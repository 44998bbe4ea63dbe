//! Application layer for Ribgen.
//!
//! This layer contains:
//! - **Commands**: Single idempotent generation steps behind the `Command` trait
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Naming rules, outline
//! compilation and placeholder substitution live in `crate::domain`.

pub mod commands;
pub mod error;
pub mod ports;
pub mod services;

pub use commands::{
    AddDependency, Command, CommandContext, CommandResult, CreateComponent, CreateComponentExtension,
    HelpCommand, Report, ReportStatus, VersionCommand,
};

pub use services::{RunSummary, ScaffoldService, StepReport};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, SourceIndex, TemplateStore};

pub use error::ApplicationError;
