//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use ribgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{RibgenError, RibgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> RibgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> RibgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> RibgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> RibgenError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("App/Dependencies");

        fs.create_dir_all(&nested).unwrap();
        assert!(fs.is_dir(&nested));

        let file = nested.join("AppComponent+Profile.swift");
        fs.write_file(&file, "extension AppComponent {}\n").unwrap();
        assert!(fs.exists(&file));
        assert!(!fs.is_dir(&file));
        assert_eq!(fs.read_file(&file).unwrap(), "extension AppComponent {}\n");
    }

    #[test]
    fn missing_file_maps_to_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_file(&dir.path().join("nope.swift"))
            .unwrap_err();
        assert_eq!(err.kind(), "filesystem");
        assert!(err.to_string().contains("Failed to read file"));
    }
}
