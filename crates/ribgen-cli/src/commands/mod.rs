//! Command handlers.
//!
//! Each handler turns a resolved invocation into calls on the core
//! `ScaffoldService` and prints what happened. No generation logic lives here.

use tracing::debug;

use ribgen_adapters::{DirectoryTemplateStore, InMemoryTemplateStore, LocalFilesystem, WalkSourceIndex};
use ribgen_core::{application::ports::TemplateStore, application::ScaffoldService, domain::Settings};

pub mod generate;
pub mod scaffold;

/// Wire the local adapters into a service.
///
/// Templates come from `templateDirectory` when the settings name one, and
/// from the built-in set otherwise.
pub fn build_service(settings: Settings) -> ScaffoldService {
    let templates: Box<dyn TemplateStore> = match &settings.template_directory {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template directory");
            Box::new(DirectoryTemplateStore::new(dir))
        }
        None => {
            debug!("Using built-in templates");
            Box::new(InMemoryTemplateStore::with_builtin())
        }
    };

    ScaffoldService::new(
        settings,
        Box::new(LocalFilesystem::new()),
        Box::new(WalkSourceIndex::new()),
        templates,
    )
}
