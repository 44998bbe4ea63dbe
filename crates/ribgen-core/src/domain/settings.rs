use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default extension of generated sources.
pub const DEFAULT_FILE_EXTENSION: &str = "swift";

/// Default line that child-builder declarations are inserted above.
pub const DEFAULT_DEPENDENCY_ANCHOR: &str = "// ribgen:child-builders";

/// Project settings, decoded from the `.ribgen` YAML file.
///
/// Passed by value into the scaffold service and every command; there is no
/// process-wide settings state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Root of the generated sources.
    pub target_directory: PathBuf,

    /// Directory holding the template blobs. Built-in templates are used
    /// when this is not set.
    #[serde(default)]
    pub template_directory: Option<PathBuf>,

    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    #[serde(default = "default_dependency_anchor")]
    pub dependency_anchor: String,
}

fn default_file_extension() -> String {
    DEFAULT_FILE_EXTENSION.to_string()
}

fn default_dependency_anchor() -> String {
    DEFAULT_DEPENDENCY_ANCHOR.to_string()
}

impl Settings {
    pub fn new(target_directory: impl Into<PathBuf>) -> Self {
        Self {
            target_directory: target_directory.into(),
            template_directory: None,
            file_extension: default_file_extension(),
            dependency_anchor: default_dependency_anchor(),
        }
    }

    pub fn with_template_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_directory = Some(dir.into());
        self
    }

    pub fn with_file_extension(mut self, ext: impl Into<String>) -> Self {
        self.file_extension = ext.into();
        self
    }

    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }

    /// `<name>.<ext>` using the configured extension.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.file_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_swift_and_anchor() {
        let settings = Settings::new("Sources");
        assert_eq!(settings.file_extension, "swift");
        assert_eq!(settings.dependency_anchor, DEFAULT_DEPENDENCY_ANCHOR);
        assert!(settings.template_directory.is_none());
    }

    #[test]
    fn file_name_uses_extension() {
        let settings = Settings::new("Sources").with_file_extension("kt");
        assert_eq!(settings.file_name("AppBuilder"), "AppBuilder.kt");
    }
}
