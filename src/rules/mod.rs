//! The rule set and the per-file context it runs in.
//!
//! Every rule reads one line of a file's [`CleansedLines`] and reports through
//! a [`Reporter`]. Line rules run through [`FileContext::process_line`]; the
//! checks that need the whole file run once in [`FileContext::finish`].

mod command;
mod naming;
mod package;
mod whitespace;

pub use command::{check_casing, check_command_spaces, check_repeat_logic};
pub use naming::{check_file_name, expected_package_var, is_find_package, is_valid_file};
pub use package::PackageState;
pub use whitespace::{check_indent, check_line_length, check_tabs, check_trailing_whitespace};

use std::path::Path;

use crate::config::LintConfig;
use crate::diagnostic::Reporter;
use crate::filter::Category;
use crate::lines::{CleansedLines, CommandCase};

/// Marker that turns a comment into a filter directive: `# lint_cmake: -whitespace/eol`.
pub const PRAGMA_MARKER: &str = "lint_cmake:";

/// Apply a filter pragma found in the comment of line `index`.
///
/// A malformed directive is reported as a `syntax` finding and ignored.
pub fn check_pragma(index: usize, lines: &CleansedLines, reporter: &mut Reporter<'_>) {
    let Some(comment) = lines.line(index).comment.as_deref() else {
        return;
    };
    let Some(spec) = comment
        .trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .strip_prefix(PRAGMA_MARKER)
    else {
        return;
    };

    match reporter.filters_mut().push_pragma(spec) {
        Ok(added) => tracing::debug!("Line {}: pragma added {added} filter(s)", index + 1),
        Err(e) => reporter.report_line(index, Category::Syntax, e.to_string()),
    }
}

/// State one file's scan carries from line to line.
#[derive(Debug)]
pub struct FileContext<'a> {
    config: &'a LintConfig,
    /// Casing of the first command seen in the file.
    case: Option<CommandCase>,
    /// Present only for Find modules.
    package: Option<PackageState>,
}

impl<'a> FileContext<'a> {
    #[must_use]
    pub fn new(path: &Path, config: &'a LintConfig) -> Self {
        Self {
            config,
            case: None,
            package: is_find_package(path).then(PackageState::new),
        }
    }

    /// Run every line rule on line `index`. The pragma check goes first so a
    /// directive applies to its own line.
    pub fn process_line(&mut self, index: usize, lines: &CleansedLines, reporter: &mut Reporter<'_>) {
        check_pragma(index, lines, reporter);
        check_line_length(index, lines, self.config.line_length, reporter);
        check_casing(index, lines, &mut self.case, reporter);
        check_indent(index, lines, self.config.spaces, reporter);
        check_command_spaces(index, lines, reporter);
        check_tabs(index, lines, reporter);
        check_trailing_whitespace(index, lines, reporter);
        check_repeat_logic(index, lines, reporter);
        if let Some(package) = &mut self.package {
            package.observe(index, lines);
        }
    }

    /// File-level checks, run after the last line.
    pub fn finish(self, reporter: &mut Reporter<'_>) {
        let path = reporter.path();
        check_file_name(path, reporter);
        if let Some(package) = self.package {
            let expected = expected_package_var(path).unwrap_or_default();
            package.done(&expected, reporter);
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
