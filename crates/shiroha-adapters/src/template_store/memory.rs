//! In-memory template store with built-in templates.

use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock},
};

use shiroha_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainValidator as validator, TemplateSet, TemplateVariant},
    error::{ShirohaError, ShirohaResult},
};
use tracing::debug;

use crate::builtin_templates;

/// Thread-safe in-memory template store, one set per variant.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<&'static str, TemplateSet>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> ShirohaResult<Self> {
        let store = Self::new();
        for set in builtin_templates::all_templates() {
            store.insert(set)?;
        }
        Ok(store)
    }

    /// Insert or replace the set for its variant.
    pub fn insert(&self, set: TemplateSet) -> ShirohaResult<()> {
        validator::validate_template_set(&set).map_err(ShirohaError::Domain)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        debug!(variant = %set.variant, files = set.entries.len(), "Registered template set");
        inner.insert(set.variant.as_str(), set);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, variant: TemplateVariant) -> ShirohaResult<TemplateSet> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(variant.as_str()).cloned().ok_or_else(|| {
            ApplicationError::TemplateVariantMissing {
                variant: variant.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> ShirohaResult<Vec<TemplateSet>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut sets: Vec<_> = inner.values().cloned().collect();
        sets.sort_by_key(|s| TemplateVariant::ALL.iter().position(|v| *v == s.variant));
        Ok(sets)
    }
}
