//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use ribgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateKey,
    error::RibgenResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
#[derive(Debug, Clone)]
pub struct InMemoryTemplateStore {
    inner: Arc<RwLock<HashMap<TemplateKey, String>>>,
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> Self {
        let store = Self::new();
        for (key, text) in builtin_templates::all_templates() {
            store.insert(key, text);
        }
        store
    }

    /// Add or replace a template.
    pub fn insert(&self, key: TemplateKey, text: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(key, text.into());
        }
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn read(&self, key: &TemplateKey) -> RibgenResult<String> {
        let not_found = || ApplicationError::TemplateNotFound {
            key: key.to_string(),
        };

        let inner = self.inner.read().map_err(|_| not_found())?;
        inner.get(key).cloned().ok_or_else(|| not_found().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribgen_core::domain::ComponentRole;

    #[test]
    fn builtin_covers_every_key() {
        let store = InMemoryTemplateStore::with_builtin();

        for owns_view in [true, false] {
            for role in ComponentRole::for_component(owns_view) {
                let key = TemplateKey::component(*role, owns_view, "swift");
                assert!(store.read(&key).is_ok(), "missing {key}");
            }
        }
        assert!(store.read(&TemplateKey::component_extension("swift")).is_ok());
    }

    #[test]
    fn unknown_extension_is_not_found() {
        let store = InMemoryTemplateStore::with_builtin();
        let err = store
            .read(&TemplateKey::component(ComponentRole::Builder, true, "kt"))
            .unwrap_err();
        assert_eq!(err.kind(), "templateNotFound");
    }

    #[test]
    fn insert_overrides() {
        let store = InMemoryTemplateStore::new();
        assert!(store.is_empty());
        let key = TemplateKey::component_extension("swift");
        store.insert(key.clone(), "a");
        store.insert(key.clone(), "b");
        assert_eq!(store.len(), 1);
        assert_eq!(store.read(&key).unwrap(), "b");
    }
}
