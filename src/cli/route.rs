//! CLI route: single route table and run context. Dispatches to context services and presentation.

use crate::cli::help::{render_help, render_version, reserved_word, ReservedWord};
use crate::cli::parse::Cli;
use crate::cli::picker::{ContextPicker, DialoguerPicker};
use crate::cli::presentation::{
    format_context_list_json, format_context_list_text, format_current_json,
    format_current_text, format_switch_outcome, Palette,
};
use crate::config::UiConfig;
use crate::context::{initial_cursor, ContextDirectory, ContextSwitcher};
use crate::error::KubecError;
use crate::kubeconfig::FileKubeconfigStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: the kubeconfig store and presentation settings.
pub struct RunContext {
    store: FileKubeconfigStore,
    ui: UiConfig,
    palette: Palette,
}

impl RunContext {
    /// Create run context from an optional explicit kubeconfig path. Without one the
    /// path comes from `$KUBECONFIG` or `~/.kube/config`.
    pub fn new(kubeconfig: Option<PathBuf>, ui: UiConfig) -> Result<Self, KubecError> {
        let store = match kubeconfig {
            Some(path) => FileKubeconfigStore::new(path),
            None => FileKubeconfigStore::locate()?,
        };
        debug!(kubeconfig = %store.path().display(), "Resolved kubeconfig path");

        let palette = Palette::detect(ui.color);
        Ok(Self { store, ui, palette })
    }

    pub fn kubeconfig_path(&self) -> &Path {
        self.store.path()
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Execute a CLI invocation with the terminal picker.
    pub fn execute(&self, cli: &Cli) -> Result<String, KubecError> {
        let picker = DialoguerPicker::new(self.ui.page_size, self.palette.is_enabled());
        self.execute_with(cli, &picker)
    }

    /// Execute a CLI invocation with the given picker for interactive selection.
    pub fn execute_with(&self, cli: &Cli, picker: &dyn ContextPicker) -> Result<String, KubecError> {
        if cli.current {
            return self.handle_current(&cli.format);
        }
        if cli.list {
            return self.handle_list(&cli.format);
        }

        match cli.context.as_deref() {
            Some(arg) => match reserved_word(arg) {
                Some(ReservedWord::Help) => Ok(render_help()),
                Some(ReservedWord::Version) => Ok(render_version()),
                None => self.handle_switch(arg),
            },
            None => self.handle_interactive(picker),
        }
    }

    fn handle_current(&self, format: &str) -> Result<String, KubecError> {
        let directory = ContextDirectory::new(&self.store);
        let active = directory.active_context_name()?;
        let declared = match active.as_deref() {
            Some(name) => directory.list_context_names()?.iter().any(|n| n == name),
            None => false,
        };

        if format == "json" {
            format_current_json(active.as_deref(), declared)
        } else {
            Ok(format_current_text(active.as_deref(), declared, self.palette))
        }
    }

    fn handle_list(&self, format: &str) -> Result<String, KubecError> {
        let rows = ContextDirectory::new(&self.store).list_contexts()?;
        if format == "json" {
            format_context_list_json(&rows)
        } else {
            Ok(format_context_list_text(&rows, self.palette))
        }
    }

    fn handle_switch(&self, name: &str) -> Result<String, KubecError> {
        let outcome = ContextSwitcher::new(&self.store).switch_to(name)?;
        Ok(format_switch_outcome(&outcome, self.palette))
    }

    fn handle_interactive(&self, picker: &dyn ContextPicker) -> Result<String, KubecError> {
        let directory = ContextDirectory::new(&self.store);
        let names = directory.list_context_names()?;
        if names.is_empty() {
            return Ok(self.palette.info_line("No available contexts found"));
        }

        let active = directory.active_context_name()?;
        let cursor = initial_cursor(&names, active.as_deref());

        let Some(index) = picker.pick(&names, cursor)? else {
            info!("Context selection cancelled");
            return Ok(self.palette.warning_line("Selection cancelled"));
        };
        let selected = names.get(index).ok_or_else(|| {
            KubecError::PromptError(format!("Selection {} is out of range", index))
        })?;

        self.handle_switch(selected)
    }
}
