//! Template store reading `<root>/<set>/<file>` from disk.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use ribgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateKey,
    error::RibgenResult,
};

/// User-provided templates, laid out as `OwnsView/`, `Default/` and
/// `ComponentExtension/` under one directory.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    root: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateStore for DirectoryTemplateStore {
    #[instrument(skip(self), fields(key = %key))]
    fn read(&self, key: &TemplateKey) -> RibgenResult<String> {
        let path = self.root.join(key.relative_path());
        debug!(path = %path.display(), "Reading template");

        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::TemplateNotFound {
                key: key.to_string(),
            }
            .into(),
            _ => ApplicationError::Filesystem {
                path,
                reason: format!("Failed to read template: {e}"),
            }
            .into(),
        })
    }
}
