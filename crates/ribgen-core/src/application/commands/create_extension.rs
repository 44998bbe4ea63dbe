//! Create the component extension that exposes a child's dependency from
//! its parent's component.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use super::{Command, CommandContext, CommandResult, Report, find_by_file_name};
use crate::application::ApplicationError;
use crate::domain::template::component_extension_stem;
use crate::domain::{Placeholders, TemplateKey};

/// Directory under a component that holds its extensions.
pub const DEPENDENCIES_DIRECTORY: &str = "Dependencies";

/// Writes `<targetDirectory>/<Parent>/Dependencies/<Parent>Component+<Child>.<ext>`.
pub struct CreateComponentExtension<'a> {
    ctx: CommandContext<'a>,
    parent: String,
    child: String,
    needs_create: bool,
}

impl<'a> CreateComponentExtension<'a> {
    pub const NAME: &'static str = "create-extension";

    pub fn new(
        ctx: CommandContext<'a>,
        snapshot: &[PathBuf],
        parent: impl Into<String>,
        child: impl Into<String>,
    ) -> Self {
        let parent = parent.into();
        let child = child.into();
        let file_name = ctx
            .settings
            .file_name(&component_extension_stem(&parent, &child));
        let needs_create = find_by_file_name(snapshot, &file_name).is_none();

        Self {
            ctx,
            parent,
            child,
            needs_create,
        }
    }

    pub fn needs_create(&self) -> bool {
        self.needs_create
    }

    fn file_name(&self) -> String {
        self.ctx
            .settings
            .file_name(&component_extension_stem(&self.parent, &self.child))
    }

    fn directory(&self) -> PathBuf {
        self.ctx
            .settings
            .target_directory()
            .join(&self.parent)
            .join(DEPENDENCIES_DIRECTORY)
    }
}

impl Command for CreateComponentExtension<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[instrument(skip_all, fields(parent = %self.parent, child = %self.child))]
    fn run(&self) -> CommandResult {
        let file_name = self.file_name();
        if !self.needs_create {
            return Ok(Report::skipped(format!(
                "No need to add {file_name}, it already exists."
            )));
        }

        let dir = self.directory();
        let path = dir.join(&file_name);
        let key = TemplateKey::component_extension(&self.ctx.settings.file_extension);

        let template = self
            .ctx
            .templates
            .read(&key)
            .map_err(|e| ApplicationError::FailedCreateFile {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        let content = Placeholders::product(&self.parent)
            .with_child(&self.child)
            .render(&template);

        self.ctx.ensure_dir(&dir)?;
        self.ctx
            .filesystem
            .write_file(&path, &content)
            .map_err(|e| ApplicationError::FailedCreateFile {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        debug!(path = %path.display(), "Wrote component extension");
        info!("Component extension created");
        Ok(Report::created(format!("Success to create {file_name}")))
    }
}
