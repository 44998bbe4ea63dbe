//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ribgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::TemplateKey;
use crate::error::RibgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ribgen_adapters::filesystem::LocalFilesystem` (production)
/// - `ribgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> RibgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> RibgenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> RibgenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port listing the sources that already exist in the project.
///
/// The listing is a snapshot: callers take a fresh one before every
/// command so that files written by an earlier step are visible.
///
/// Implemented by:
/// - `ribgen_adapters::source_index::WalkSourceIndex` (production)
/// - `ribgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait SourceIndex {
    /// All files under `root` with the given extension (without the dot).
    ///
    /// A missing `root` yields an empty list, not an error.
    fn source_paths(&self, root: &Path, extension: &str) -> RibgenResult<Vec<PathBuf>>;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `ribgen_adapters::template_store::DirectoryTemplateStore` (user templates)
/// - `ribgen_adapters::template_store::InMemoryTemplateStore` (built-in templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore {
    /// Raw template text, placeholders not yet substituted.
    fn read(&self, key: &TemplateKey) -> RibgenResult<String>;
}
