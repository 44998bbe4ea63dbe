//! Diagnostics on stderr.
//!
//! The core and adapter crates emit `tracing` events; this module is the only
//! place a subscriber is installed. Failed steps are logged at WARN by the
//! scaffold service, so they show up by default next to the ✗ report line.
//!
//! | Flag(s)   | ribgen crates log at |
//! |-----------|----------------------|
//! | (none)    | WARN                 |
//! | `-v`      | INFO                 |
//! | `-vv`     | DEBUG                |
//! | `-vvv`    | TRACE                |
//! | `--quiet` | ERROR                |
//!
//! A `RUST_LOG` value (from the shell or `.env`) replaces the table entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Targets the flag-derived level applies to. Third-party crates stay silent.
const CRATES: [&str; 3] = ["ribgen", "ribgen_core", "ribgen_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(derive_level(args))));

    // Step reports own stdout; keep log lines compact and off it.
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

/// `--quiet` wins over any `-v` count.
fn derive_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

/// `ribgen=<level>,ribgen_core=<level>,...`
fn filter_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
