//! Scaffold Service - main application orchestrator.
//!
//! This service turns invocations and compiled outlines into command
//! pipelines:
//! 1. Take a fresh snapshot of existing sources
//! 2. Build the next command from that snapshot
//! 3. Run it and hand the outcome to the caller
//!
//! Runs are best-effort. A failed step is reported and the pipeline moves on;
//! nothing is rolled back. Only setup failures (a missing or malformed
//! outline) abort before the first command.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        commands::{
            AddDependency, Command, CommandContext, CommandResult, CreateComponent,
            CreateComponentExtension, HelpCommand, ReportStatus, VersionCommand,
        },
        ports::{Filesystem, SourceIndex, TemplateStore},
    },
    domain::{Edge, Invocation, Settings, outline},
    error::{RibgenError, RibgenResult},
};

/// Outcome of one command, as handed to the caller's sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// `Command::name()` of the step.
    pub command: &'static str,
    pub parent: Option<String>,
    pub target: String,
    pub result: CommandResult,
}

impl StepReport {
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }

    pub fn error(&self) -> Option<&RibgenError> {
        self.result.as_ref().err()
    }

    pub fn status(&self) -> Option<ReportStatus> {
        self.result.as_ref().ok().map(|report| report.status)
    }
}

/// Totals for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub created: usize,
    pub edited: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Exit code of the first failed step, if any.
    pub first_exit_code: Option<u8>,
}

impl RunSummary {
    pub fn record(&mut self, step: &StepReport) {
        match &step.result {
            Ok(report) => match report.status {
                ReportStatus::Created => self.created += 1,
                ReportStatus::Edited => self.edited += 1,
                ReportStatus::Skipped => self.skipped += 1,
                ReportStatus::Info => {}
            },
            Err(e) => {
                self.failed += 1;
                self.first_exit_code.get_or_insert(e.exit_code());
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code: 0 unless a step failed.
    pub fn exit_code(&self) -> u8 {
        self.first_exit_code.unwrap_or(0)
    }
}

/// One pipeline step, before its command is built.
#[derive(Debug, Clone, Copy)]
enum Step<'e> {
    Component { target: &'e str, owns_view: bool },
    Extension { parent: &'e str, child: &'e str },
    Dependency { parent: &'e str, child: &'e str },
}

impl Step<'_> {
    fn command_name(&self) -> &'static str {
        match self {
            Self::Component { .. } => CreateComponent::NAME,
            Self::Extension { .. } => CreateComponentExtension::NAME,
            Self::Dependency { .. } => AddDependency::NAME,
        }
    }

    fn build<'c>(&self, ctx: CommandContext<'c>, snapshot: &[PathBuf]) -> Box<dyn Command + 'c> {
        match *self {
            Self::Component { target, owns_view } => {
                Box::new(CreateComponent::new(ctx, snapshot, target, owns_view))
            }
            Self::Extension { parent, child } => {
                Box::new(CreateComponentExtension::new(ctx, snapshot, parent, child))
            }
            Self::Dependency { parent, child } => {
                Box::new(AddDependency::new(ctx, snapshot, parent, child))
            }
        }
    }

    fn parent(&self) -> Option<String> {
        match self {
            Self::Component { .. } => None,
            Self::Extension { parent, .. } | Self::Dependency { parent, .. } => {
                Some(parent.to_string())
            }
        }
    }

    fn target(&self) -> String {
        match self {
            Self::Component { target, .. } => target.to_string(),
            Self::Extension { child, .. } | Self::Dependency { child, .. } => child.to_string(),
        }
    }
}

/// Main scaffolding service.
///
/// Owns the settings and the adapters for one run.
pub struct ScaffoldService {
    settings: Settings,
    filesystem: Box<dyn Filesystem>,
    index: Box<dyn SourceIndex>,
    templates: Box<dyn TemplateStore>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use ribgen_core::application::ScaffoldService;
    /// use ribgen_core::domain::Settings;
    ///
    /// let service = ScaffoldService::new(
    ///     Settings::new("Sources"),
    ///     filesystem, // impl Filesystem
    ///     index,      // impl SourceIndex
    ///     templates,  // impl TemplateStore
    /// );
    /// ```
    pub fn new(
        settings: Settings,
        filesystem: Box<dyn Filesystem>,
        index: Box<dyn SourceIndex>,
        templates: Box<dyn TemplateStore>,
    ) -> Self {
        Self {
            settings,
            filesystem,
            index,
            templates,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run whatever an invocation asks for.
    ///
    /// Fails only when the run cannot start; step failures are in the summary.
    pub fn execute(
        &self,
        invocation: &Invocation,
        on_step: &mut dyn FnMut(&StepReport),
    ) -> RibgenResult<RunSummary> {
        match invocation {
            Invocation::Help => Ok(self.run_info(&HelpCommand, on_step)),
            Invocation::Version => Ok(self.run_info(&VersionCommand::default(), on_step)),
            Invocation::Add {
                target,
                parent,
                owns_view,
            } => Ok(self.add(target, parent.as_deref(), *owns_view, on_step)),
            Invocation::Link { parent, child } => Ok(self.link(parent, child, on_step)),
            Invocation::Scaffold { outline, parent } => {
                let edges = self.compile_outline(outline, parent)?;
                Ok(self.scaffold(&edges, on_step))
            }
        }
    }

    /// Create a component; with a parent, also link it.
    #[instrument(skip(self, on_step))]
    pub fn add(
        &self,
        target: &str,
        parent: Option<&str>,
        owns_view: bool,
        on_step: &mut dyn FnMut(&StepReport),
    ) -> RunSummary {
        let mut steps = vec![Step::Component { target, owns_view }];
        if let Some(parent) = parent {
            steps.push(Step::Extension {
                parent,
                child: target,
            });
            steps.push(Step::Dependency {
                parent,
                child: target,
            });
        }
        self.run_steps(&steps, on_step)
    }

    /// Link an existing child to an existing parent.
    #[instrument(skip(self, on_step))]
    pub fn link(
        &self,
        parent: &str,
        child: &str,
        on_step: &mut dyn FnMut(&StepReport),
    ) -> RunSummary {
        self.run_steps(
            &[
                Step::Extension { parent, child },
                Step::Dependency { parent, child },
            ],
            on_step,
        )
    }

    /// Run the three-step pipeline for every edge, in order.
    #[instrument(skip_all, fields(edges = edges.len()))]
    pub fn scaffold(&self, edges: &[Edge], on_step: &mut dyn FnMut(&StepReport)) -> RunSummary {
        let mut summary = RunSummary::default();

        for edge in edges {
            info!(parent = %edge.parent, target = %edge.target, "Scaffolding edge");
            let steps = [
                Step::Component {
                    target: &edge.target,
                    owns_view: edge.is_owns_view,
                },
                Step::Extension {
                    parent: &edge.parent,
                    child: &edge.target,
                },
                Step::Dependency {
                    parent: &edge.parent,
                    child: &edge.target,
                },
            ];
            for step in steps {
                let report = self.run_step(step);
                summary.record(&report);
                on_step(&report);
            }
        }

        info!(
            created = summary.created,
            edited = summary.edited,
            skipped = summary.skipped,
            failed = summary.failed,
            "Scaffold finished"
        );
        summary
    }

    /// Read and compile an outline document.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn compile_outline(&self, path: &Path, root: &str) -> RibgenResult<Vec<Edge>> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::OutlineNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let text = self
            .filesystem
            .read_file(path)
            .map_err(|e| ApplicationError::OutlineUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let edges = outline::compile(&text, root)?;
        info!(edges = edges.len(), "Outline compiled");
        Ok(edges)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn context(&self) -> CommandContext<'_> {
        CommandContext::new(
            &self.settings,
            self.filesystem.as_ref(),
            self.templates.as_ref(),
        )
    }

    fn snapshot(&self) -> RibgenResult<Vec<PathBuf>> {
        self.index
            .source_paths(self.settings.target_directory(), &self.settings.file_extension)
    }

    fn run_steps(&self, steps: &[Step<'_>], on_step: &mut dyn FnMut(&StepReport)) -> RunSummary {
        let mut summary = RunSummary::default();
        for step in steps {
            let report = self.run_step(*step);
            summary.record(&report);
            on_step(&report);
        }
        summary
    }

    fn run_info(&self, command: &dyn Command, on_step: &mut dyn FnMut(&StepReport)) -> RunSummary {
        let report = StepReport {
            command: command.name(),
            parent: None,
            target: String::new(),
            result: command.run(),
        };
        let mut summary = RunSummary::default();
        summary.record(&report);
        on_step(&report);
        summary
    }

    fn run_step(&self, step: Step<'_>) -> StepReport {
        let result = self.snapshot().and_then(|snapshot| {
            let command = step.build(self.context(), &snapshot);
            command.run()
        });

        if let Err(e) = &result {
            warn!(
                command = step.command_name(),
                kind = e.kind(),
                error = %e,
                "Step failed"
            );
        }

        StepReport {
            command: step.command_name(),
            parent: step.parent(),
            target: step.target(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Report;
    use crate::application::ports::{MockFilesystem, MockSourceIndex, MockTemplateStore};

    fn service(fs: MockFilesystem, index: MockSourceIndex) -> ScaffoldService {
        ScaffoldService::new(
            Settings::new("Sources"),
            Box::new(fs),
            Box::new(index),
            Box::new(MockTemplateStore::new()),
        )
    }

    #[test]
    fn missing_outline_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_read_file().never();
        let mut index = MockSourceIndex::new();
        index.expect_source_paths().never();

        let svc = service(fs, index);
        let err = svc
            .compile_outline(Path::new("tree.md"), "App")
            .unwrap_err();
        assert_eq!(err.kind(), "outlineNotFound");
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn unreadable_outline_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_file().returning(|p| {
            Err(ApplicationError::Filesystem {
                path: p.to_path_buf(),
                reason: "invalid UTF-8".into(),
            }
            .into())
        });

        let svc = service(fs, MockSourceIndex::new());
        let err = svc
            .compile_outline(Path::new("tree.md"), "App")
            .unwrap_err();
        assert_eq!(err.kind(), "outlineUnreadable");
    }

    #[test]
    fn malformed_outline_aborts_before_any_step() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_file()
            .returning(|_| Ok("- A\n\t- B\n".to_string()));
        fs.expect_write_file().never();
        let mut index = MockSourceIndex::new();
        index.expect_source_paths().never();

        let svc = service(fs, index);
        let invocation = Invocation::Scaffold {
            outline: PathBuf::from("tree.md"),
            parent: "App".into(),
        };
        let mut steps = 0;
        let err = svc
            .execute(&invocation, &mut |_| steps += 1)
            .unwrap_err();

        assert_eq!(err.kind(), "malformedOutline");
        assert_eq!(steps, 0);
    }

    #[test]
    fn step_names_match_built_commands() {
        let settings = Settings::new("Sources");
        let fs = MockFilesystem::new();
        let templates = MockTemplateStore::new();
        let ctx = CommandContext::new(&settings, &fs, &templates);

        let steps = [
            Step::Component {
                target: "Profile",
                owns_view: true,
            },
            Step::Extension {
                parent: "App",
                child: "Profile",
            },
            Step::Dependency {
                parent: "App",
                child: "Profile",
            },
        ];
        for step in steps {
            assert_eq!(step.build(ctx, &[]).name(), step.command_name());
        }
    }

    #[test]
    fn index_failure_fails_each_step_but_run_continues() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();
        let mut index = MockSourceIndex::new();
        index.expect_source_paths().times(3).returning(|root, _| {
            Err(ApplicationError::IndexFailed {
                root: root.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let svc = service(fs, index);
        let mut seen = Vec::new();
        let summary = svc.add("Profile", Some("App"), true, &mut |step| {
            seen.push(step.command);
        });

        assert_eq!(
            seen,
            vec!["create-component", "create-extension", "add-dependency"]
        );
        assert_eq!(summary.failed, 3);
        assert_eq!(summary.exit_code(), 8);
    }

    #[test]
    fn add_without_parent_runs_one_step() {
        let mut index = MockSourceIndex::new();
        index
            .expect_source_paths()
            .times(1)
            .returning(|_, _| Ok(vec![PathBuf::from("Sources/Profile/ProfileBuilder.swift")]));

        let svc = service(MockFilesystem::new(), index);
        let mut reports = Vec::new();
        let summary = svc.add("Profile", None, true, &mut |step| reports.push(step.clone()));

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].status(), Some(ReportStatus::Skipped));
        assert_eq!(summary.skipped, 1);
        assert!(summary.is_success());
    }

    #[test]
    fn summary_keeps_first_exit_code() {
        let fail = |code_kind: ApplicationError| StepReport {
            command: "x",
            parent: None,
            target: "T".into(),
            result: Err(code_kind.into()),
        };
        let ok = StepReport {
            command: "x",
            parent: None,
            target: "T".into(),
            result: Ok(Report::created("done")),
        };

        let mut summary = RunSummary::default();
        summary.record(&ok);
        summary.record(&fail(ApplicationError::BuilderNotFound {
            parent: "App".into(),
            file_name: "AppBuilder.swift".into(),
        }));
        summary.record(&fail(ApplicationError::FailedCreateDirectory {
            path: PathBuf::from("x"),
            reason: "denied".into(),
        }));

        assert_eq!(summary.created, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.exit_code(), 6);
    }

    #[test]
    fn help_needs_no_adapters() {
        let svc = service(MockFilesystem::new(), MockSourceIndex::new());
        let mut messages = Vec::new();
        let summary = svc
            .execute(&Invocation::Help, &mut |step| {
                messages.push(step.result.clone().map(|r| r.message))
            })
            .unwrap();

        assert_eq!(summary.exit_code(), 0);
        assert!(messages[0].as_ref().unwrap().contains("scaffold"));
    }
}
