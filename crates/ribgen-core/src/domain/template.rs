//! Template addressing and placeholder substitution.
//!
//! Templates are opaque text blobs. The only structure ribgen relies on is
//! two placeholder tokens, replaced literally:
//!
//! ```text
//! ___VARIABLE_productName___  -> component (or parent) name
//! ___VARIABLE_childName___    -> child name
//! ```

use std::fmt;
use std::path::PathBuf;

/// Token standing for the product / parent name.
pub const PRODUCT_NAME_TOKEN: &str = "___VARIABLE_productName___";

/// Token standing for the child name.
pub const CHILD_NAME_TOKEN: &str = "___VARIABLE_childName___";

/// Template set for components that own a view.
pub const OWNS_VIEW_SET: &str = "OwnsView";

/// Template set for view-less components.
pub const DEFAULT_SET: &str = "Default";

/// Template set for component extensions.
pub const COMPONENT_EXTENSION_SET: &str = "ComponentExtension";

/// The source files that make up one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentRole {
    Builder,
    Interactor,
    Router,
    ViewController,
}

impl ComponentRole {
    /// Roles generated for a component, in write order.
    pub fn for_component(owns_view: bool) -> &'static [ComponentRole] {
        if owns_view {
            &[
                Self::Builder,
                Self::Interactor,
                Self::Router,
                Self::ViewController,
            ]
        } else {
            &[Self::Builder, Self::Interactor, Self::Router]
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Builder => "Builder",
            Self::Interactor => "Interactor",
            Self::Router => "Router",
            Self::ViewController => "ViewController",
        }
    }
}

impl fmt::Display for ComponentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of a template inside a template store: `<set>/<file>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    set: &'static str,
    file: String,
}

impl TemplateKey {
    pub fn new(set: &'static str, file: impl Into<String>) -> Self {
        Self {
            set,
            file: file.into(),
        }
    }

    /// Template for one role of a component.
    pub fn component(role: ComponentRole, owns_view: bool, extension: &str) -> Self {
        let set = if owns_view { OWNS_VIEW_SET } else { DEFAULT_SET };
        Self::new(set, format!("{}.{}", role.as_str(), extension))
    }

    /// Template for a parent's component extension.
    pub fn component_extension(extension: &str) -> Self {
        Self::new(
            COMPONENT_EXTENSION_SET,
            format!("{}.{}", COMPONENT_EXTENSION_SET, extension),
        )
    }

    pub fn set(&self) -> &str {
        self.set
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Relative path under a template directory.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.set).join(&self.file)
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.set, self.file)
    }
}

/// Values substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    product_name: String,
    child_name: Option<String>,
}

impl Placeholders {
    pub fn product(name: impl Into<String>) -> Self {
        Self {
            product_name: name.into(),
            child_name: None,
        }
    }

    pub fn with_child(mut self, name: impl Into<String>) -> Self {
        self.child_name = Some(name.into());
        self
    }

    /// Literal whole-token replacement; unknown tokens are left untouched.
    pub fn render(&self, template: &str) -> String {
        let rendered = template.replace(PRODUCT_NAME_TOKEN, &self.product_name);
        match &self.child_name {
            Some(child) => rendered.replace(CHILD_NAME_TOKEN, child),
            None => rendered,
        }
    }
}

/// `<Parent>Component+<Child>` without extension.
pub fn component_extension_stem(parent: &str, child: &str) -> String {
    format!("{parent}Component+{child}")
}

/// `<Name><Role>` without extension.
pub fn component_file_stem(name: &str, role: ComponentRole) -> String {
    format!("{name}{role}")
}

/// `fooBar` for `FooBar`, used for local variable names in generated code.
pub fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
