//! Shared context types returned by directory queries and switches.

use serde::{Deserialize, Serialize};

/// One row of the context listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSummary {
    pub name: String,
    pub cluster: String,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub active: bool,
}

/// Result of a successful switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchOutcome {
    /// Context that is now active.
    pub context: String,
    /// Context that was active before the switch, if any.
    pub previous: Option<String>,
    /// False when the requested context was already active.
    pub changed: bool,
}
