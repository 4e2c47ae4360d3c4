mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::diagnostic::Diagnostic;
use crate::error::Result;

/// Everything a formatter needs about one run.
#[derive(Debug, Clone, Copy)]
pub struct LintReport<'a> {
    pub diagnostics: &'a [Diagnostic],
    /// Number of files actually linted.
    pub files: usize,
}

impl LintReport<'_> {
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Trait for formatting lint results into various output formats.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &LintReport<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
