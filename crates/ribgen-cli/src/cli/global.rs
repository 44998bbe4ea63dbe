//! Flags accepted ahead of the subcommand tokens.
//!
//! Flattened into [`super::Cli`]. Anything after the first token belongs to
//! the `<command> <argument> [--option [value]]...` grammar and is passed
//! through untouched, so `ribgen add Foo -v` does not raise verbosity.

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of what each generation step does (stderr).
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Log more detail to stderr (-v, -vv, -vvv)",
        long_help = "Log more detail to stderr. Step reports on stdout are unaffected.
    -v      - one line per scaffolded edge and per written file
    -vv     - snapshot lookups, skipped directories, settings path
    -vvv    - every outline line as it is tokenized"
    )]
    pub verbose: u8,

    /// Hide created / skipped lines; failures are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only report failed steps"
    )]
    pub quiet: bool,

    /// Plain ✓/⚠/✗ markers without ANSI colour. Also set by `NO_COLOR`.
    #[arg(long = "no-color", env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    /// YAML settings to use instead of `.ribgen` in the current directory.
    #[arg(
        short = 's',
        long = "settings",
        value_name = "FILE",
        help = "Settings file (default: .ribgen, then .ribscodegen)"
    )]
    pub settings: Option<PathBuf>,

    /// How step reports are rendered on stdout.
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "Step report format"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of step reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured ✓/⚠/✗ lines.
    Human,
    Plain,
    /// One JSON object per step, then a summary object.
    Json,
}
