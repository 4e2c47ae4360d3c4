use std::fs;
use std::path::Path;

use crate::config::LintConfig;
use crate::diagnostic::{Diagnostic, Reporter};
use crate::error::{CmakeLintError, Result};
use crate::filter::{Category, FilterRegistry};
use crate::lines::{CleansedLines, split_lines};
use crate::rules::{FileContext, is_valid_file};

/// What happened to one path handed to [`Linter::lint_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintOutcome {
    /// The file was scanned; these findings survived filtering.
    Linted(Vec<Diagnostic>),
    /// The path is not a lintable file name.
    Ignored,
}

/// A lint session: effective settings, the filter registry and the running
/// error count.
///
/// Files are linted one at a time. Pragma filters a file enables are dropped
/// before the next file starts.
#[derive(Debug)]
pub struct Linter {
    config: LintConfig,
    filters: FilterRegistry,
    error_count: usize,
    files_linted: usize,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(LintConfig::default())
    }
}

impl Linter {
    #[must_use]
    pub fn new(config: LintConfig) -> Self {
        let filters = FilterRegistry::new(config.filters.clone());
        Self {
            config,
            filters,
            error_count: 0,
            files_linted: 0,
        }
    }

    /// Return to built-in defaults and forget all counts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub const fn config(&self) -> &LintConfig {
        &self.config
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    /// Diagnostics reported so far, across all files.
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }

    #[must_use]
    pub const fn files_linted(&self) -> usize {
        self.files_linted
    }

    /// Lint in-memory content as if it were the file at `path`.
    pub fn lint_source(&mut self, path: &Path, source: &str) -> Vec<Diagnostic> {
        let (raw, saw_carriage_return) = split_lines(source);
        let lines = CleansedLines::new(&raw);

        let mut reporter = Reporter::new(path, &mut self.filters);
        let mut context = FileContext::new(path, &self.config);
        for index in lines.line_numbers() {
            context.process_line(index, &lines, &mut reporter);
        }
        if saw_carriage_return && !cfg!(windows) {
            reporter.report_file(
                Category::WhitespaceNewline,
                "Unexpected carriage return found; Better to use only \\n",
            );
        }
        context.finish(&mut reporter);
        let diagnostics = reporter.into_diagnostics();

        self.filters.clear_pragmas();
        self.error_count += diagnostics.len();
        self.files_linted += 1;
        tracing::debug!(
            "Linted {} ({} lines, {} errors)",
            path.display(),
            lines.len(),
            diagnostics.len()
        );
        diagnostics
    }

    /// Read and lint the file at `path`, skipping names that are not lintable.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn lint_file(&mut self, path: &Path) -> Result<LintOutcome> {
        if !is_valid_file(path) {
            tracing::info!("Skipping {}: not a CMake file", path.display());
            return Ok(LintOutcome::Ignored);
        }

        let bytes = fs::read(path).map_err(|source| CmakeLintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);
        Ok(LintOutcome::Linted(self.lint_source(path, &source)))
    }
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
