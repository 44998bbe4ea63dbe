//! CLI argument definitions using the clap derive API.
//!
//! clap owns the global flags only. The subcommand grammar
//! (`<command> <argument> [--option [value]]...`) is parsed by
//! `ribgen_core::domain::Argument`, so the tokens are collected raw.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "ribgen",
    bin_name = "ribgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "RIB scaffolding from the command line or from an outline",
    long_about = "ribgen creates Router / Interactor / Builder source files from \
                  templates and wires parent/child dependencies between them.",
    after_help = "COMMANDS:\n\
        \x20 add <Name> [--parent <Parent>] [--no-view]\n\
        \x20 link <Child> --parent <Parent>\n\
        \x20 scaffold <outline.md> --parent <Root>\n\
        \x20 help <anything>\n\
        \x20 version <anything>\n\n\
        EXAMPLES:\n\
        \x20 ribgen add Profile --parent App\n\
        \x20 ribgen add Settings --parent App --no-view\n\
        \x20 ribgen scaffold tree.md --parent App",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand, its argument, and `--option [value]` pairs.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_after_the_command_are_kept_raw() {
        let cli = Cli::try_parse_from([
            "ribgen", "-v", "add", "Profile", "--parent", "App", "--no-view",
        ])
        .unwrap();

        assert_eq!(cli.global.verbose, 1);
        assert_eq!(
            cli.tokens,
            vec!["add", "Profile", "--parent", "App", "--no-view"]
        );
    }

    #[test]
    fn settings_flag_is_global() {
        let cli =
            Cli::try_parse_from(["ribgen", "--settings", "ci.yml", "link", "Child", "--parent", "App"])
                .unwrap();
        assert_eq!(
            cli.global.settings.as_deref(),
            Some(std::path::Path::new("ci.yml"))
        );
        assert_eq!(cli.tokens.len(), 4);
    }

    #[test]
    fn no_tokens_is_accepted_by_clap() {
        let cli = Cli::try_parse_from(["ribgen"]).unwrap();
        assert!(cli.tokens.is_empty());
    }
}
