//! Context switch: the only operation that writes the kubeconfig.

use crate::context::types::SwitchOutcome;
use crate::error::KubecError;
use crate::kubeconfig::KubeconfigStore;
use tracing::{debug, info, warn};

/// Validates a requested context against the declared set and persists it as
/// `current-context`.
pub struct ContextSwitcher<'a, S: KubeconfigStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KubeconfigStore + ?Sized> ContextSwitcher<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Make `requested` the active context.
    ///
    /// The name must match a declared context exactly. On a miss nothing is
    /// written. Only `current-context` changes; every other field is saved as loaded.
    pub fn switch_to(&self, requested: &str) -> Result<SwitchOutcome, KubecError> {
        debug!(store = %self.store.location(), "Loading kubeconfig");
        let mut config = self.store.load()?;

        debug!(context = requested, "Validating requested context");
        if config.find_context(requested).is_none() {
            warn!(context = requested, "Requested context is not declared");
            return Err(KubecError::ContextNotFound(requested.to_string()));
        }

        let previous = config.current_context().map(str::to_owned);
        config.set_current_context(requested);

        debug!(store = %self.store.location(), "Saving kubeconfig");
        self.store.save(&config)?;

        info!(context = requested, previous = ?previous, "Switched current context");
        Ok(SwitchOutcome {
            changed: previous.as_deref() != Some(requested),
            context: requested.to_string(),
            previous,
        })
    }
}
