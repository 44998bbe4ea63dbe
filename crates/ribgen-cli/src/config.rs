//! Settings loading.
//!
//! [`load_settings`] reads the project's YAML settings file once at startup.
//! The resulting [`Settings`] value is passed down explicitly; the core crate
//! never reads files or environment on its own.
//!
//! # Resolution order
//!
//! 1. `--settings <FILE>` (must exist)
//! 2. `.ribgen` in the current directory
//! 3. `.ribscodegen` in the current directory (legacy name)
//!
//! ```yaml
//! targetDirectory: Sources
//! templateDirectory: Templates   # optional, built-in templates otherwise
//! fileExtension: swift           # optional
//! dependencyAnchor: "// ribgen:child-builders"  # optional
//! ```

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use tracing::{debug, instrument};

use ribgen_core::domain::Settings;

use crate::error::{CliError, CliResult};

/// Default settings file name, looked up in the current directory.
pub const SETTINGS_FILE_NAME: &str = ".ribgen";

/// Settings file name used by earlier releases.
pub const LEGACY_SETTINGS_FILE_NAME: &str = ".ribscodegen";

/// Locate and decode the settings file.
#[instrument]
pub fn load_settings(explicit: Option<&Path>) -> CliResult<Settings> {
    let path = resolve_path(explicit, Path::new("."))?;
    debug!(path = %path.display(), "Loading settings");
    decode(&path)
}

/// Pick the settings file: the explicit one, else the first default name
/// present in `dir`.
fn resolve_path(explicit: Option<&Path>, dir: &Path) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(CliError::SettingNotFound {
            path: path.to_path_buf(),
        });
    }

    [SETTINGS_FILE_NAME, LEGACY_SETTINGS_FILE_NAME]
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| CliError::SettingNotFound {
            path: PathBuf::from(SETTINGS_FILE_NAME),
        })
}

fn decode(path: &Path) -> CliResult<Settings> {
    let decode_failed = |source| CliError::SettingDecodeFailed {
        path: path.to_path_buf(),
        source,
    };

    let path_str = path.to_string_lossy();
    Config::builder()
        .add_source(File::new(&path_str, FileFormat::Yaml).required(true))
        .build()
        .map_err(decode_failed)?
        .try_deserialize::<Settings>()
        .map_err(decode_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn decodes_camel_case_keys_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".ribgen");
        fs::write(&path, "targetDirectory: Sources\ntemplateDirectory: Templates\n").unwrap();

        let settings = decode(&path).unwrap();
        assert_eq!(settings.target_directory, PathBuf::from("Sources"));
        assert_eq!(settings.template_directory, Some(PathBuf::from("Templates")));
        assert_eq!(settings.file_extension, "swift");
    }

    #[test]
    fn missing_target_directory_fails_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".ribgen");
        fs::write(&path, "fileExtension: swift\n").unwrap();

        let err = decode(&path).unwrap_err();
        assert_eq!(err.kind(), "settingDecodeFailed");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn falls_back_to_legacy_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".ribscodegen"), "targetDirectory: Sources\n").unwrap();

        let path = resolve_path(None, dir.path()).unwrap();
        assert!(path.ends_with(".ribscodegen"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("ci.yml");

        let err = resolve_path(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, CliError::SettingNotFound { path } if path == missing));
    }

    #[test]
    fn nothing_found_names_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_path(None, dir.path()).unwrap_err();
        assert!(err.to_string().contains(".ribgen"));
    }
}
