// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for ribgen.
//!
//! This module contains pure logic: token parsing, outline compilation,
//! naming rules and placeholder substitution. All I/O is handled via ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: `Argument`, `Edge` and `Settings` never change once built
//!
pub mod argument;
pub mod error;
pub mod outline;
pub mod settings;
pub mod template;

pub use argument::{Argument, Invocation};
pub use error::{DomainError, ErrorCategory};
pub use outline::{Edge, Node, Outline, compile};
pub use settings::Settings;
pub use template::{ComponentRole, Placeholders, TemplateKey};
