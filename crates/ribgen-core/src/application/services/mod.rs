//! Application services - orchestrate use cases.
//!
//! Services turn an invocation or a compiled outline into a sequence of
//! commands and report each outcome as it happens.

pub mod scaffold_service;

pub use scaffold_service::{RunSummary, ScaffoldService, StepReport};
