use crate::diagnostic::Diagnostic;

/// Classic `path:line: message [category]` lines followed by the error total.
///
/// Text output streams: each file's lines are printed as soon as the file is
/// linted, so this renders pieces rather than a whole report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    quiet: bool,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// One diagnostic, without a trailing newline.
    #[must_use]
    pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
        format!(
            "{}:{}: {} [{}]",
            diagnostic.path.display(),
            diagnostic.line,
            diagnostic.message,
            diagnostic.category
        )
    }

    /// The closing `Total Errors` line; quiet runs without errors print nothing.
    #[must_use]
    pub fn format_total(&self, errors: usize) -> Option<String> {
        (errors > 0 || !self.quiet).then(|| format!("Total Errors: {errors}"))
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
