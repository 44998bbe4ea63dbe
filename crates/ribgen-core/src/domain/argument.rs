//! Raw command-line tokens and the typed invocation derived from them.
//!
//! The token grammar is deliberately small:
//!
//! ```text
//! <first> <second> [--key [value]]...
//! ```
//!
//! `first` names the subcommand, `second` is the component name or outline
//! path. Everything after those two is scanned once, left to right, for
//! `--key` flags and their optional values.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use tracing::warn;

use super::error::DomainError;

/// Prefix that marks an option key.
pub const FLAG_PREFIX: &str = "--";

/// Option key naming the parent component.
pub const PARENT_OPTION: &str = "parent";

/// Option key suppressing the view-controller artifact.
pub const NO_VIEW_OPTION: &str = "no-view";

/// A parsed CLI invocation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    first: String,
    second: String,
    options: HashMap<String, String>,
}

impl Argument {
    /// Parse raw tokens (executable name already removed).
    ///
    /// # Errors
    ///
    /// `DomainError::LackOfArguments` when fewer than two tokens are given.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, DomainError> {
        let mut iter = tokens.iter().map(AsRef::as_ref);
        let first = iter.next().ok_or(DomainError::LackOfArguments)?;
        let second = iter.next().ok_or(DomainError::LackOfArguments)?;

        let mut options = HashMap::new();
        let mut latest_key: Option<String> = None;

        for token in iter {
            match token.strip_prefix(FLAG_PREFIX) {
                Some(key) => {
                    options.insert(key.to_string(), String::new());
                    latest_key = Some(key.to_string());
                }
                None => match &latest_key {
                    Some(key) => {
                        options.insert(key.clone(), token.to_string());
                    }
                    None => warn!(token, "Ignoring value without a preceding --option"),
                },
            }
        }

        Ok(Self {
            first: first.to_string(),
            second: second.to_string(),
            options,
        })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn options(&self) -> &HashMap<String, String> {
        &self.options
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    pub fn has_parent(&self) -> bool {
        self.options.contains_key(PARENT_OPTION)
    }

    pub fn no_view(&self) -> bool {
        self.options.contains_key(NO_VIEW_OPTION)
    }

    /// Parent name, or the empty string when `--parent` was not given.
    pub fn parent(&self) -> &str {
        self.option(PARENT_OPTION).unwrap_or_default()
    }

    /// Resolve the subcommand into a typed invocation.
    ///
    /// Unknown subcommands fall back to [`Invocation::Help`].
    pub fn invocation(&self) -> Result<Invocation, DomainError> {
        let invocation = match self.first.as_str() {
            "help" => Invocation::Help,
            "version" => Invocation::Version,
            "add" => Invocation::Add {
                target: self.second.clone(),
                parent: self.non_empty_parent().map(str::to_string),
                owns_view: !self.no_view(),
            },
            "link" => Invocation::Link {
                parent: self.required_parent()?,
                child: self.second.clone(),
            },
            "scaffold" => Invocation::Scaffold {
                outline: PathBuf::from(&self.second),
                parent: self.required_parent()?,
            },
            _ => Invocation::Help,
        };
        Ok(invocation)
    }

    fn non_empty_parent(&self) -> Option<&str> {
        self.option(PARENT_OPTION).filter(|p| !p.is_empty())
    }

    fn required_parent(&self) -> Result<String, DomainError> {
        self.non_empty_parent()
            .map(str::to_string)
            .ok_or_else(|| DomainError::MissingOption {
                subcommand: self.first.clone(),
                option: PARENT_OPTION,
            })
    }
}

/// What the user asked for, after token parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    Add {
        target: String,
        parent: Option<String>,
        owns_view: bool,
    },
    Link {
        parent: String,
        child: String,
    },
    Scaffold {
        outline: PathBuf,
        parent: String,
    },
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => write!(f, "help"),
            Self::Version => write!(f, "version"),
            Self::Add { target, parent: Some(parent), .. } => {
                write!(f, "add {target} --parent {parent}")
            }
            Self::Add { target, .. } => write!(f, "add {target}"),
            Self::Link { parent, child } => write!(f, "link {child} --parent {parent}"),
            Self::Scaffold { outline, parent } => {
                write!(f, "scaffold {} --parent {parent}", outline.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_parent_and_no_view() {
        let arg = Argument::parse(&["add", "Profile", "--parent", "App", "--no-view"]).unwrap();

        assert_eq!(arg.first(), "add");
        assert_eq!(arg.second(), "Profile");
        assert_eq!(arg.options().len(), 2);
        assert_eq!(arg.option("parent"), Some("App"));
        assert_eq!(arg.option("no-view"), Some(""));
        assert!(arg.has_parent());
        assert!(arg.no_view());
        assert_eq!(arg.parent(), "App");
    }

    #[test]
    fn fewer_than_two_tokens_is_lack_of_arguments() {
        assert_eq!(
            Argument::parse::<&str>(&[]),
            Err(DomainError::LackOfArguments)
        );
        assert_eq!(
            Argument::parse(&["add"]),
            Err(DomainError::LackOfArguments)
        );
    }

    #[test]
    fn flag_without_value_keeps_empty_string() {
        let arg = Argument::parse(&["add", "Foo", "--no-view", "--parent", "Bar"]).unwrap();
        assert_eq!(arg.option("no-view"), Some(""));
        assert_eq!(arg.parent(), "Bar");
    }

    #[test]
    fn last_key_wins() {
        let arg = Argument::parse(&["add", "Foo", "--parent", "A", "--parent", "B"]).unwrap();
        assert_eq!(arg.parent(), "B");

        // A redeclared key without a value resets to empty.
        let arg = Argument::parse(&["add", "Foo", "--parent", "A", "--parent"]).unwrap();
        assert_eq!(arg.parent(), "");
        assert!(arg.has_parent());
    }

    #[test]
    fn stray_value_before_any_flag_is_ignored() {
        let arg = Argument::parse(&["add", "Foo", "stray", "--parent", "App"]).unwrap();
        assert_eq!(arg.options().len(), 1);
        assert_eq!(arg.parent(), "App");
    }

    #[test]
    fn no_parent_means_empty_parent() {
        let arg = Argument::parse(&["add", "Foo"]).unwrap();
        assert!(!arg.has_parent());
        assert!(!arg.no_view());
        assert_eq!(arg.parent(), "");
    }

    #[test]
    fn add_invocation() {
        let arg = Argument::parse(&["add", "Profile", "--parent", "App", "--no-view"]).unwrap();
        assert_eq!(
            arg.invocation().unwrap(),
            Invocation::Add {
                target: "Profile".into(),
                parent: Some("App".into()),
                owns_view: false,
            }
        );

        let arg = Argument::parse(&["add", "Profile"]).unwrap();
        assert_eq!(
            arg.invocation().unwrap(),
            Invocation::Add {
                target: "Profile".into(),
                parent: None,
                owns_view: true,
            }
        );
    }

    #[test]
    fn link_requires_parent() {
        let arg = Argument::parse(&["link", "Child"]).unwrap();
        assert!(matches!(
            arg.invocation(),
            Err(DomainError::MissingOption { option: "parent", .. })
        ));

        let arg = Argument::parse(&["link", "Child", "--parent", "App"]).unwrap();
        assert_eq!(
            arg.invocation().unwrap(),
            Invocation::Link {
                parent: "App".into(),
                child: "Child".into(),
            }
        );
    }

    #[test]
    fn scaffold_invocation() {
        let arg = Argument::parse(&["scaffold", "tree.md", "--parent", "App"]).unwrap();
        assert_eq!(
            arg.invocation().unwrap(),
            Invocation::Scaffold {
                outline: PathBuf::from("tree.md"),
                parent: "App".into(),
            }
        );

        let arg = Argument::parse(&["scaffold", "tree.md", "--parent"]).unwrap();
        assert!(arg.invocation().is_err());
    }

    #[test]
    fn unknown_subcommand_falls_back_to_help() {
        let arg = Argument::parse(&["frobnicate", "x"]).unwrap();
        assert_eq!(arg.invocation().unwrap(), Invocation::Help);
    }

    #[test]
    fn invocation_display() {
        let inv = Invocation::Link {
            parent: "App".into(),
            child: "Profile".into(),
        };
        assert_eq!(inv.to_string(), "link Profile --parent App");
    }
}
