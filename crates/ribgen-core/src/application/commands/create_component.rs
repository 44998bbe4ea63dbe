//! Create the source files of one RIB component.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use super::{Command, CommandContext, CommandResult, Report, find_by_file_name};
use crate::application::ApplicationError;
use crate::domain::template::component_file_stem;
use crate::domain::{ComponentRole, Placeholders, TemplateKey};

/// Writes `<Target>Builder`, `<Target>Interactor`, `<Target>Router` and, for
/// components that own a view, `<Target>ViewController` into
/// `<targetDirectory>/<Target>/`.
pub struct CreateComponent<'a> {
    ctx: CommandContext<'a>,
    target: String,
    owns_view: bool,
    needs_create: bool,
}

impl<'a> CreateComponent<'a> {
    pub const NAME: &'static str = "create-component";

    /// The component counts as present when its builder file is in `snapshot`.
    pub fn new(
        ctx: CommandContext<'a>,
        snapshot: &[PathBuf],
        target: impl Into<String>,
        owns_view: bool,
    ) -> Self {
        let target = target.into();
        let builder = ctx
            .settings
            .file_name(&component_file_stem(&target, ComponentRole::Builder));
        let needs_create = find_by_file_name(snapshot, &builder).is_none();

        Self {
            ctx,
            target,
            owns_view,
            needs_create,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn needs_create(&self) -> bool {
        self.needs_create
    }

    fn directory(&self) -> PathBuf {
        self.ctx.settings.target_directory().join(&self.target)
    }

    /// Every (path, content) pair, rendered before anything is written.
    fn render_all(&self) -> Result<Vec<(PathBuf, String)>, ApplicationError> {
        let settings = self.ctx.settings;
        let placeholders = Placeholders::product(&self.target);
        let dir = self.directory();

        ComponentRole::for_component(self.owns_view)
            .iter()
            .map(|role| -> Result<(PathBuf, String), ApplicationError> {
                let path = dir.join(settings.file_name(&component_file_stem(&self.target, *role)));
                let key = TemplateKey::component(*role, self.owns_view, &settings.file_extension);
                let template = self.ctx.templates.read(&key).map_err(|e| {
                    ApplicationError::FailedCreateFile {
                        path: path.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Ok((path, placeholders.render(&template)))
            })
            .collect()
    }
}

impl Command for CreateComponent<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[instrument(skip_all, fields(target = %self.target, owns_view = self.owns_view))]
    fn run(&self) -> CommandResult {
        if !self.needs_create {
            debug!("Builder already indexed");
            return Ok(Report::skipped(format!(
                "No need to add {}, it already exists.",
                self.target
            )));
        }

        let files = self.render_all()?;
        self.ctx.ensure_dir(&self.directory())?;

        for (path, content) in &files {
            self.ctx
                .filesystem
                .write_file(path, content)
                .map_err(|e| ApplicationError::FailedCreateFile {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
            debug!(path = %path.display(), "Wrote component file");
        }

        info!(files = files.len(), "Component created");
        Ok(Report::created(format!(
            "Success to create {} ({} files)",
            self.target,
            files.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateStore};
    use crate::domain::Settings;
    use crate::error::RibgenError;
    use std::path::Path;

    fn settings() -> Settings {
        Settings::new("Sources")
    }

    #[test]
    fn skips_when_builder_indexed() {
        let settings = settings();
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();
        let mut templates = MockTemplateStore::new();
        templates.expect_read().never();

        let snapshot = vec![PathBuf::from("Sources/Profile/ProfileBuilder.swift")];
        let cmd = CreateComponent::new(
            CommandContext::new(&settings, &fs, &templates),
            &snapshot,
            "Profile",
            true,
        );

        assert!(!cmd.needs_create());
        let report = cmd.run().unwrap();
        assert_eq!(report.status, crate::application::ReportStatus::Skipped);
        assert!(report.message.contains("No need to add Profile"));
    }

    #[test]
    fn similar_names_do_not_count_as_existing() {
        let settings = settings();
        let fs = MockFilesystem::new();
        let templates = MockTemplateStore::new();

        let snapshot = vec![PathBuf::from("Sources/UserProfile/UserProfileBuilder.swift")];
        let cmd = CreateComponent::new(
            CommandContext::new(&settings, &fs, &templates),
            &snapshot,
            "Profile",
            true,
        );

        assert!(cmd.needs_create());
    }

    #[test]
    fn writes_three_files_without_view() {
        let settings = settings();
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("Sources/Settings"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, content| {
                p.starts_with("Sources/Settings") && content.starts_with("// Settings")
            })
            .times(3)
            .returning(|_, _| Ok(()));

        let mut templates = MockTemplateStore::new();
        templates
            .expect_read()
            .withf(|key| key.set() == "Default")
            .times(3)
            .returning(|key| Ok(format!("// ___VARIABLE_productName___ {}", key.file())));

        let cmd = CreateComponent::new(
            CommandContext::new(&settings, &fs, &templates),
            &[],
            "Settings",
            false,
        );

        let report = cmd.run().unwrap();
        assert_eq!(report.status, crate::application::ReportStatus::Created);
        assert!(report.message.contains("3 files"));
    }

    #[test]
    fn directory_failure_stops_before_writes() {
        let settings = settings();
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(|p| {
            Err(ApplicationError::Filesystem {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let mut templates = MockTemplateStore::new();
        templates.expect_read().returning(|_| Ok(String::new()));

        let cmd = CreateComponent::new(
            CommandContext::new(&settings, &fs, &templates),
            &[],
            "Profile",
            true,
        );

        let err = cmd.run().unwrap_err();
        assert_eq!(err.kind(), "failedCreateDirectory");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn missing_template_is_failed_create_file() {
        let settings = settings();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let mut templates = MockTemplateStore::new();
        templates.expect_read().returning(|key| {
            Err(RibgenError::from(ApplicationError::TemplateNotFound {
                key: key.to_string(),
            }))
        });

        let cmd = CreateComponent::new(
            CommandContext::new(&settings, &fs, &templates),
            &[],
            "Profile",
            true,
        );

        let err = cmd.run().unwrap_err();
        assert_eq!(err.kind(), "failedCreateFile");
        assert!(err.to_string().contains("ProfileBuilder.swift"));
    }
}
