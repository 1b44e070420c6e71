//! Read-only queries over the kubeconfig: context names, the active context, listing rows.

use crate::context::types::ContextSummary;
use crate::error::KubecError;
use crate::kubeconfig::KubeconfigStore;
use tracing::debug;

/// Context queries. Every call loads a fresh document from the store and
/// propagates load failures unchanged.
pub struct ContextDirectory<'a, S: KubeconfigStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KubeconfigStore + ?Sized> ContextDirectory<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Declared context names, sorted ascending.
    pub fn list_context_names(&self) -> Result<Vec<String>, KubecError> {
        let config = self.store.load()?;
        let mut names: Vec<String> = config.context_names().map(str::to_owned).collect();
        names.sort();
        debug!(count = names.len(), "Listed context names");
        Ok(names)
    }

    /// Value of `current-context`, or `None` when unset.
    pub fn active_context_name(&self) -> Result<Option<String>, KubecError> {
        let config = self.store.load()?;
        Ok(config.current_context().map(str::to_owned))
    }

    /// Listing rows sorted by name, with the active context flagged.
    pub fn list_contexts(&self) -> Result<Vec<ContextSummary>, KubecError> {
        let config = self.store.load()?;
        let active = config.current_context();
        let mut rows: Vec<ContextSummary> = config
            .contexts
            .iter()
            .map(|c| ContextSummary {
                name: c.name.clone(),
                cluster: c.context.cluster.clone(),
                user: c.context.user.clone(),
                namespace: c.context.namespace.clone(),
                active: active == Some(c.name.as_str()),
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}

/// Position of `active` in `names`, or 0 when it is unset or not listed.
pub fn initial_cursor(names: &[String], active: Option<&str>) -> usize {
    active
        .and_then(|active| names.iter().position(|name| name == active))
        .unwrap_or(0)
}
