//! Output management and formatting.
//!
//! Step reports and summaries go to stdout. Fatal errors are rendered by
//! `main` on stderr, with a JSON copy on stdout in JSON mode.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde_json::{Value, json};

use ribgen_core::application::{ReportStatus, RunSummary, StepReport};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::error::CliError;

/// Manages CLI output based on the global flags.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    pub fn new(args: &GlobalArgs) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Reports ────────────────────────────────────────────────────────────

    /// Render one step as it completes.
    pub fn step(&self, step: &StepReport) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json_line(&step_json(step));
        }

        match &step.result {
            Ok(report) => match report.status {
                ReportStatus::Created | ReportStatus::Edited => self.success(&report.message),
                ReportStatus::Skipped => self.warning(&report.message),
                ReportStatus::Info => self.term.write_line(&report.message),
            },
            Err(e) => self.error(&format!("{} {}: {}", step.command, step.target, e)),
        }
    }

    /// Final totals of a generation run.
    pub fn summary(&self, summary: &RunSummary) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json_line(&json!({
                "summary": {
                    "created": summary.created,
                    "edited": summary.edited,
                    "skipped": summary.skipped,
                    "failed": summary.failed,
                    "exitCode": summary.exit_code(),
                }
            }));
        }

        let line = format!(
            "{} created, {} edited, {} skipped, {} failed",
            summary.created, summary.edited, summary.skipped, summary.failed
        );
        if summary.is_success() {
            self.header(&line)
        } else {
            self.error(&line)
        }
    }

    /// JSON copy of a fatal error; no-op outside JSON mode.
    pub fn fatal(&self, err: &CliError) -> io::Result<()> {
        if self.resolved_format != OutputFormat::Json {
            return Ok(());
        }
        self.json_line(&json!({
            "error": {
                "kind": err.kind(),
                "message": err.to_string(),
                "exitCode": err.exit_code(),
            }
        }))
    }

    // ── Line primitives ────────────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`. *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line. Omitted in JSON mode.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet || self.resolved_format == OutputFormat::Json {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    fn json_line(&self, value: &Value) -> io::Result<()> {
        self.term.write_line(&value.to_string())
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// JSON object for one step.
fn step_json(step: &StepReport) -> Value {
    let mut value = json!({
        "command": step.command,
        "parent": step.parent,
        "target": step.target,
    });

    match &step.result {
        Ok(report) => {
            value["status"] = json!(report.status);
            value["message"] = json!(report.message);
        }
        Err(e) => {
            value["status"] = json!("failed");
            value["error"] = json!({
                "kind": e.kind(),
                "message": e.to_string(),
                "exitCode": e.exit_code(),
            });
        }
    }
    value
}

// ── tests ─────────────────────────────────────────────────────────────────────
