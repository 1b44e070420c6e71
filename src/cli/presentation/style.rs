//! Terminal styling. Colors apply only when enabled; otherwise text passes through.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Colors on when configured, NO_COLOR is unset or empty, and stdout is a terminal.
    pub fn detect(color_setting: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(color_setting && !no_color && std::io::stdout().is_terminal())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn green(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn red(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn blue(&self, text: &str) -> String {
        if self.enabled {
            text.blue().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn yellow(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn cyan(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success_line(&self, message: &str) -> String {
        format!("✓ {}", self.green(message))
    }

    pub fn error_line(&self, message: &str) -> String {
        format!("✗ {}", self.red(message))
    }

    pub fn info_line(&self, message: &str) -> String {
        format!("ℹ {}", self.blue(message))
    }

    pub fn warning_line(&self, message: &str) -> String {
        format!("⚠ {}", self.yellow(message))
    }

    /// Title underlined with `=` to its width.
    pub fn header(&self, title: &str) -> String {
        let divider = "=".repeat(title.chars().count());
        format!("{}\n{}", self.cyan(title), self.cyan(&divider))
    }
}
