use std::path::{Path, PathBuf};

use crate::filter::{Category, FilterRegistry};

/// One reported style problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    /// 1-based line number; 0 for findings about the file as a whole.
    pub line: usize,
    pub category: Category,
    pub message: String,
}

/// Receives findings for one file and keeps those its filters let through.
///
/// Filtering happens here, before a diagnostic exists: a finding in a disabled
/// category is dropped without being recorded or counted.
///
/// Findings are collected while a file is scanned and handed out once it is
/// finished, ordered by line. File-level findings (line 0) come first; findings
/// on the same line keep the order the rules reported them in.
#[derive(Debug)]
pub struct Reporter<'a> {
    path: &'a Path,
    filters: &'a mut FilterRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Reporter<'a> {
    pub fn new(path: &'a Path, filters: &'a mut FilterRegistry) -> Self {
        Self {
            path,
            filters,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'a Path {
        self.path
    }

    /// Report a finding on the 0-based line `index`.
    pub fn report_line(&mut self, index: usize, category: Category, message: impl Into<String>) {
        self.report(index + 1, category, message.into());
    }

    /// Report a finding about the file as a whole.
    pub fn report_file(&mut self, category: Category, message: impl Into<String>) {
        self.report(0, category, message.into());
    }

    fn report(&mut self, line: usize, category: Category, message: String) {
        if !self.filters.is_enabled(category.as_str()) {
            return;
        }
        self.diagnostics.push(Diagnostic {
            path: self.path.to_path_buf(),
            line,
            category,
            message,
        });
    }

    pub fn filters_mut(&mut self) -> &mut FilterRegistry {
        &mut *self.filters
    }

    #[cfg(test)]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics in line order; findings on the same line keep report order.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics;
        diagnostics.sort_by_key(|d| d.line);
        diagnostics
    }
}
