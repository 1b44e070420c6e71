//! Context domain: read-only queries and the single write path over a kubeconfig store.
//! The CLI consumes both; neither holds state between calls.

pub mod directory;
pub mod switcher;
pub mod types;

pub use directory::{initial_cursor, ContextDirectory};
pub use switcher::ContextSwitcher;
pub use types::{ContextSummary, SwitchOutcome};
