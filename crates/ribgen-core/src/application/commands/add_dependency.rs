//! Declare a child builder inside its parent's builder.
//!
//! The parent builder carries an anchor comment (by default
//! `// ribgen:child-builders`). The declaration
//!
//! ```text
//! let profileBuilder = ProfileBuilder(dependency: component)
//! ```
//!
//! is inserted on its own line directly above the anchor, with the anchor's
//! indentation, so repeated links stack up in link order.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use super::{Command, CommandContext, CommandResult, Report, find_by_file_name};
use crate::application::ApplicationError;
use crate::domain::ComponentRole;
use crate::domain::template::{component_file_stem, lower_camel};

pub struct AddDependency<'a> {
    ctx: CommandContext<'a>,
    parent: String,
    child: String,
    builder_path: Option<PathBuf>,
}

impl<'a> AddDependency<'a> {
    pub const NAME: &'static str = "add-dependency";

    /// Resolves the parent's builder from `snapshot` by exact file name.
    pub fn new(
        ctx: CommandContext<'a>,
        snapshot: &[PathBuf],
        parent: impl Into<String>,
        child: impl Into<String>,
    ) -> Self {
        let parent = parent.into();
        let child = child.into();
        let builder = ctx
            .settings
            .file_name(&component_file_stem(&parent, ComponentRole::Builder));
        let builder_path = find_by_file_name(snapshot, &builder).map(|p| p.to_path_buf());

        Self {
            ctx,
            parent,
            child,
            builder_path,
        }
    }

    pub fn builder_path(&self) -> Option<&PathBuf> {
        self.builder_path.as_ref()
    }

    /// `<Child>Builder(dependency: component)`, the part that proves the link exists.
    fn construction(&self) -> String {
        format!(
            "{}(dependency: component)",
            component_file_stem(&self.child, ComponentRole::Builder)
        )
    }

    fn declaration(&self) -> String {
        format!(
            "let {}Builder = {}",
            lower_camel(&self.child),
            self.construction()
        )
    }
}

impl Command for AddDependency<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[instrument(skip_all, fields(parent = %self.parent, child = %self.child))]
    fn run(&self) -> CommandResult {
        let parent_builder = component_file_stem(&self.parent, ComponentRole::Builder);
        let child_builder = component_file_stem(&self.child, ComponentRole::Builder);

        let Some(path) = &self.builder_path else {
            return Err(ApplicationError::BuilderNotFound {
                parent: self.parent.clone(),
                file_name: self.ctx.settings.file_name(&parent_builder),
            }
            .into());
        };

        let source = self
            .ctx
            .filesystem
            .read_file(path)
            .map_err(|e| ApplicationError::FailedEditFile {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        if declares(&source, &self.construction()) {
            debug!(path = %path.display(), "Child builder already declared");
            return Ok(Report::skipped(format!(
                "No need to add {child_builder} to {parent_builder}, it already exists."
            )));
        }

        let anchor = self.ctx.settings.dependency_anchor.as_str();
        let Some(updated) = insert_above_anchor(&source, anchor, &self.declaration()) else {
            warn!(path = %path.display(), anchor, "Dependency anchor missing");
            return Err(ApplicationError::FailedEditFile {
                path: path.clone(),
                reason: format!("anchor line '{anchor}' not found"),
            }
            .into());
        };

        self.ctx
            .filesystem
            .write_file(path, &updated)
            .map_err(|e| ApplicationError::FailedEditFile {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        info!(path = %path.display(), "Child builder declared");
        Ok(Report::edited(format!(
            "Success to add {child_builder} to {parent_builder}"
        )))
    }
}

/// Whether `construction` appears as a whole identifier, not as the tail of a
/// longer builder name such as `UserProfileBuilder(...)`.
fn declares(source: &str, construction: &str) -> bool {
    source.match_indices(construction).any(|(at, _)| {
        source[..at]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
    })
}

/// Insert `line` before the first line whose trimmed text equals the trimmed
/// anchor. Indentation and line ending are copied from the anchor line.
fn insert_above_anchor(source: &str, anchor: &str, line: &str) -> Option<String> {
    let anchor = anchor.trim();
    let mut offset = 0;

    for segment in source.split_inclusive('\n') {
        if segment.trim() == anchor {
            let indent_len = segment.len() - segment.trim_start().len();
            let indent = &segment[..indent_len];
            let newline = if segment.ends_with("\r\n") { "\r\n" } else { "\n" };

            let mut out = String::with_capacity(source.len() + line.len() + indent.len() + 2);
            out.push_str(&source[..offset]);
            out.push_str(indent);
            out.push_str(line);
            out.push_str(newline);
            out.push_str(&source[offset..]);
            return Some(out);
        }
        offset += segment.len();
    }

    None
}
