//! Source index backed by a recursive directory walk.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use ribgen_core::{
    application::{ApplicationError, ports::SourceIndex},
    error::RibgenResult,
};

/// Lists source files by walking the target directory on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkSourceIndex;

impl WalkSourceIndex {
    pub fn new() -> Self {
        Self
    }
}

impl SourceIndex for WalkSourceIndex {
    #[instrument(skip(self, root), fields(root = %root.display()))]
    fn source_paths(&self, root: &Path, extension: &str) -> RibgenResult<Vec<PathBuf>> {
        if !root.exists() {
            debug!("Target directory does not exist yet");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::IndexFailed {
                root: root.to_path_buf(),
                reason: format!("directory walk error: {e}"),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().is_some_and(|ext| ext == extension) {
                paths.push(entry.into_path());
            }
        }

        debug!(count = paths.len(), "Indexed sources");
        Ok(paths)
    }
}
