//! # ribgen CLI
//!
//! RIB scaffolding from the command line or from a bullet outline.
//!
//! ## Startup sequence
//!
//! 1. Parse global flags with clap; the remaining tokens are kept raw.
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load `.ribgen` settings. Every subcommand needs them, `help` included.
//! 4. Parse the tokens into an `Argument` and resolve the invocation.
//! 5. Dispatch to the command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success                                  |
//! |  1   | Settings or terminal failure             |
//! |  2   | Missing arguments or options             |
//! |  3   | A directory could not be created         |
//! |  4   | A file could not be created              |
//! |  5   | A file could not be edited               |
//! |  6   | The parent builder was not found         |
//! |  7   | The outline is missing or malformed      |
//! |  8   | The source tree could not be indexed     |
//!
//! When several steps of a run fail, the first failure's code is used.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use ribgen_core::domain::{Argument, Invocation};

use crate::{
    cli::Cli,
    config::load_settings,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version come through here too, on stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        tokens = cli.tokens.len(),
        "CLI started"
    );

    // ── 3. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global);
    let verbose = cli.global.verbose > 0;

    // ── 4. Dispatch + 5. Error handling ──────────────────────────────────
    match run(&cli, &output) {
        Ok(0) => {
            info!("ribgen completed successfully");
            ExitCode::SUCCESS
        }
        Ok(code) => {
            info!(exit_code = code, "ribgen completed with failures");
            ExitCode::from(code)
        }
        Err(e) => handle_error(e, &output, verbose),
    }
}

/// Load settings, resolve the invocation, and hand it to its command handler.
///
/// Settings come first: a missing or undecodable file is fatal before the
/// tokens are even looked at.
#[instrument(skip_all)]
fn run(cli: &Cli, output: &OutputManager) -> CliResult<u8> {
    let settings = load_settings(cli.global.settings.as_deref())?;

    let invocation = Argument::parse(&cli.tokens)?.invocation()?;
    debug!(%invocation, "Invocation resolved");

    let service = commands::build_service(settings);

    match &invocation {
        Invocation::Scaffold { outline, parent } => {
            commands::scaffold::execute(outline, parent, &service, output)
        }
        _ => commands::generate::execute(&invocation, &service, output),
    }
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, output: &OutputManager, verbose: bool) -> ExitCode {
    err.log();

    let _ = output.fatal(&err);

    let msg = if output.supports_color() && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
