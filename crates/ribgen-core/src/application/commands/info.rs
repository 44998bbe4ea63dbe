//! Commands that only print information.

use super::{Command, CommandResult, Report};

/// Usage text shown by `ribgen help` and for unknown subcommands.
pub const USAGE: &str = "\
Usage: ribgen [OPTIONS] <COMMAND> <ARGUMENT> [--option [value]]...

Commands:
  add <Name> [--parent <Parent>] [--no-view]
        Create a RIB. With --parent, also link it to the parent.
  link <Child> --parent <Parent>
        Create the component extension and declare the child builder
        inside the parent builder.
  scaffold <outline.md> --parent <Root>
        Create and link every RIB listed in an indented bullet outline.
        A trailing '*' on a name creates a RIB without a view.
  help <anything>
        Show this message.
  version <anything>
        Show the version.

Every command takes at least two tokens. Settings are read from .ribgen
in the current directory before anything else runs.";

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn run(&self) -> CommandResult {
        Ok(Report::info(USAGE))
    }
}

pub struct VersionCommand {
    version: String,
}

impl VersionCommand {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Default for VersionCommand {
    fn default() -> Self {
        Self::new(crate::VERSION)
    }
}

impl Command for VersionCommand {
    fn name(&self) -> &'static str {
        "version"
    }

    fn run(&self) -> CommandResult {
        Ok(Report::info(self.version.clone()))
    }
}
