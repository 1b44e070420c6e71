//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::cli::presentation::Palette;
use crate::error::KubecError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &KubecError, palette: Palette) -> String {
    palette.error_line(&e.to_string())
}
