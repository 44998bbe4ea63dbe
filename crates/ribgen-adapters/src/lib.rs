//! Infrastructure adapters for ribgen.
//!
//! This crate implements the ports defined in `ribgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod source_index;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use source_index::WalkSourceIndex;
pub use template_store::{DirectoryTemplateStore, InMemoryTemplateStore};
