//! CLI presentation: colors and per-command text/json formatters.

mod context;
mod style;

pub use context::{
    format_context_list_json, format_context_list_text, format_current_json,
    format_current_text, format_switch_outcome,
};
pub use style::Palette;
