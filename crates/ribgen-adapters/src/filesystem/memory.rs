//! In-memory filesystem adapter for testing.
//!
//! Also serves as its own source index, so a whole scaffold run can be
//! exercised without touching the disk.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use ribgen_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, SourceIndex},
    },
    error::{RibgenError, RibgenResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same contents.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories. Not counted as a write.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Make directory creation and writes under `path` fail.
    pub fn with_read_only(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.as_ref().to_path_buf());
        }
        self
    }

    /// A file's content, if present (testing helper).
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files in path order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of successful `write_file` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }

    fn is_read_only(inner: &MemoryFilesystemInner, path: &Path) -> bool {
        inner.read_only.iter().any(|ro| path.starts_with(ro))
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> RibgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;

        if Self::is_read_only(&inner, path) {
            return Err(fs_error(path, "Permission denied"));
        }

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> RibgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;

        if Self::is_read_only(&inner, path) {
            return Err(fs_error(path, "Permission denied"));
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(fs_error(path, "Parent directory does not exist"));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn read_file(&self, path: &Path) -> RibgenResult<String> {
        let inner = self.inner.read().map_err(|_| lock_poisoned(path))?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| fs_error(path, "No such file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

impl SourceIndex for MemoryFilesystem {
    fn source_paths(&self, root: &Path, extension: &str) -> RibgenResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::IndexFailed {
                root: root.to_path_buf(),
                reason: "store lock poisoned".into(),
            })?;

        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .filter(|p| p.extension().is_some_and(|ext| ext == extension))
            .cloned()
            .collect())
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn fs_error(path: &Path, reason: &str) -> RibgenError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn lock_poisoned(path: &Path) -> RibgenError {
    fs_error(path, "store lock poisoned")
}
