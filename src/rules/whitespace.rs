//! Checks on the physical layout of a raw line.

use crate::diagnostic::Reporter;
use crate::filter::Category;
use crate::lines::CleansedLines;

pub fn check_line_length(
    index: usize,
    lines: &CleansedLines,
    max_length: usize,
    reporter: &mut Reporter<'_>,
) {
    if lines.raw(index).chars().count() > max_length {
        reporter.report_line(
            index,
            Category::LineLength,
            format!("Lines should be <= {max_length} characters long"),
        );
    }
}

/// Leading spaces must be a multiple of `spaces`. Blank and comment-only lines,
/// including the body of a multi-line bracket comment, are exempt.
pub fn check_indent(index: usize, lines: &CleansedLines, spaces: usize, reporter: &mut Reporter<'_>) {
    let raw = lines.raw(index);
    let content = raw.trim_start();
    if content.is_empty() || content.starts_with('#') || lines.line(index).in_comment {
        return;
    }

    let leading = leading_spaces(raw);
    if leading.checked_rem(spaces).is_some_and(|rem| rem != 0) {
        reporter.report_line(
            index,
            Category::WhitespaceIndent,
            format!("Weird indentation; use {spaces} spaces"),
        );
    }
}

pub fn check_tabs(index: usize, lines: &CleansedLines, reporter: &mut Reporter<'_>) {
    if lines.raw(index).contains('\t') {
        reporter.report_line(index, Category::WhitespaceTabs, "Tab found; please use spaces");
    }
}

/// Runs on the raw line so trailing blanks inside a comment are caught too.
pub fn check_trailing_whitespace(index: usize, lines: &CleansedLines, reporter: &mut Reporter<'_>) {
    if lines
        .raw(index)
        .chars()
        .next_back()
        .is_some_and(char::is_whitespace)
    {
        reporter.report_line(index, Category::WhitespaceEol, "Line ends in whitespace");
    }
}

/// Number of space characters a line starts with. Tabs are not counted.
pub(super) fn leading_spaces(text: &str) -> usize {
    text.len() - text.trim_start_matches(' ').len()
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
