//! Context presentation: current context, context listing, switch confirmation.

use super::style::Palette;
use crate::context::{ContextSummary, SwitchOutcome};
use crate::error::KubecError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

pub fn format_current_text(active: Option<&str>, declared: bool, palette: Palette) -> String {
    match active {
        Some(name) => {
            let mut out = format!("Current context: {}", palette.green(name));
            if !declared {
                out.push('\n');
                out.push_str(&palette.warning_line(&format!(
                    "Context '{}' is not declared in the kubeconfig",
                    name
                )));
            }
            out
        }
        None => "No current context is set".to_string(),
    }
}

pub fn format_current_json(active: Option<&str>, declared: bool) -> Result<String, KubecError> {
    to_json(&json!({
        "current_context": active,
        "declared": active.map(|_| declared),
    }))
}

pub fn format_context_list_text(rows: &[ContextSummary], palette: Palette) -> String {
    if rows.is_empty() {
        return palette.info_line("No available contexts found");
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["CURRENT", "NAME", "CLUSTER", "USER", "NAMESPACE"]);
    for row in rows {
        table.add_row(vec![
            if row.active { "*" } else { "" }.to_string(),
            row.name.clone(),
            row.cluster.clone(),
            row.user.clone(),
            row.namespace.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    format!("{}\n\n{}", palette.header("Contexts"), table)
}

pub fn format_context_list_json(rows: &[ContextSummary]) -> Result<String, KubecError> {
    let current = rows.iter().find(|r| r.active).map(|r| r.name.as_str());
    to_json(&json!({
        "current_context": current,
        "contexts": rows,
    }))
}

pub fn format_switch_outcome(outcome: &SwitchOutcome, palette: Palette) -> String {
    if outcome.changed {
        format!("Switched to context '{}'", palette.green(&outcome.context))
    } else {
        format!("Context '{}' is already active", palette.green(&outcome.context))
    }
}

fn to_json(value: &serde_json::Value) -> Result<String, KubecError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| KubecError::ConfigError(format!("Failed to encode output: {}", e)))
}
