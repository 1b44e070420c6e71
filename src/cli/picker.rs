//! Interactive context selection.

use crate::error::KubecError;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Select;

/// Presents context names and returns the chosen index.
pub trait ContextPicker {
    /// Index into `names` of the chosen context, or `None` if the user cancelled.
    fn pick(&self, names: &[String], initial: usize) -> Result<Option<usize>, KubecError>;
}

/// Terminal picker backed by `dialoguer::Select`. Esc or `q` cancels.
pub struct DialoguerPicker {
    page_size: usize,
    color: bool,
}

impl DialoguerPicker {
    pub fn new(page_size: usize, color: bool) -> Self {
        Self { page_size, color }
    }
}

impl ContextPicker for DialoguerPicker {
    fn pick(&self, names: &[String], initial: usize) -> Result<Option<usize>, KubecError> {
        let colorful = ColorfulTheme::default();
        let simple = SimpleTheme;
        let theme: &dyn Theme = if self.color { &colorful } else { &simple };

        Select::with_theme(theme)
            .with_prompt("Select a context")
            .items(names)
            .default(initial)
            .max_length(self.page_size)
            .interact_opt()
            .map_err(|e| KubecError::PromptError(e.to_string()))
    }
}
