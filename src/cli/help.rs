//! CLI help: reserved command words and the command-name contract for logging.

use crate::cli::parse::Cli;
use clap::CommandFactory;

/// Positional words that ask for help or the version instead of naming a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedWord {
    Help,
    Version,
}

const HELP_WORDS: [&str; 3] = ["help", "--help", "-h"];
const VERSION_WORDS: [&str; 3] = ["version", "--version", "-v"];

/// Classify a positional argument. Matching is case-insensitive, unlike context
/// names, which are always matched exactly.
pub fn reserved_word(arg: &str) -> Option<ReservedWord> {
    if HELP_WORDS.iter().any(|w| w.eq_ignore_ascii_case(arg)) {
        Some(ReservedWord::Help)
    } else if VERSION_WORDS.iter().any(|w| w.eq_ignore_ascii_case(arg)) {
        Some(ReservedWord::Version)
    } else {
        None
    }
}

pub fn render_help() -> String {
    Cli::command().render_help().to_string()
}

pub fn render_version() -> String {
    Cli::command().render_version().trim_end().to_string()
}

/// Command name for log fields (e.g. "current", "switch").
pub fn command_name(cli: &Cli) -> &'static str {
    if cli.current {
        return "current";
    }
    if cli.list {
        return "list";
    }
    match cli.context.as_deref().map(reserved_word) {
        Some(Some(ReservedWord::Help)) => "help",
        Some(Some(ReservedWord::Version)) => "version",
        Some(None) => "switch",
        None => "select",
    }
}
