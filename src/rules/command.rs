//! Checks on command invocations: casing, spacing around `()`, and
//! block-closing commands that repeat their opening expression.

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::Reporter;
use crate::filter::Category;
use crate::lines::{CleansedLines, CommandCase, command_case, is_mixed_case, match_command};

use super::whitespace::leading_spaces;

/// Whitespace right after the opening `(` of a command.
static START_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\w+\s*\((\s*)").expect("Invalid regex"));

/// A command called with a non-empty argument list.
static WITH_ARGUMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*\(\s*\S+[^)]+\)").expect("Invalid regex"));

/// Block-closing commands whose arguments only repeat the opening expression.
const CLOSING_COMMANDS: [&str; 6] = [
    "else",
    "endforeach",
    "endfunction",
    "endif",
    "endmacro",
    "endwhile",
];

static CLOSING_WORDS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    CLOSING_COMMANDS
        .iter()
        .map(|cmd| {
            let re = Regex::new(&format!(r"\b{cmd}\b")).expect("Invalid regex");
            (*cmd, re)
        })
        .collect()
});

/// Mixed-case names are always flagged. Otherwise the first command in the
/// file fixes the convention and later commands must follow it.
pub fn check_casing(
    index: usize,
    lines: &CleansedLines,
    seen: &mut Option<CommandCase>,
    reporter: &mut Reporter<'_>,
) {
    let Some(command) = match_command(lines.text(index)) else {
        return;
    };

    if is_mixed_case(command.name) {
        reporter.report_line(
            index,
            Category::ReadabilityWonkyCase,
            "Do not use mixed case commands",
        );
        return;
    }

    let case = command_case(command.name);
    match *seen {
        None => *seen = Some(case),
        Some(first) if first != case => reporter.report_line(
            index,
            Category::ReadabilityMixedCase,
            "Do not mix upper and lower case commands",
        ),
        Some(_) => {}
    }
}

/// Flags a gap between a command and its `(`, unbalanced padding inside the
/// parentheses, and commands whose balancing `)` never appears.
///
/// When the `)` sits on a later line, that line's own indentation is not
/// counted as padding.
pub fn check_command_spaces(index: usize, lines: &CleansedLines, reporter: &mut Reporter<'_>) {
    let text = lines.text(index);
    let Some(command) = match_command(text) else {
        return;
    };

    if !command.gap.is_empty() {
        reporter.report_line(
            index,
            Category::WhitespaceExtra,
            format!("Extra spaces between '{}' and its ()", command.name),
        );
    }

    let after_open = START_SPACES
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(0, |m| m.as_str().chars().count());

    let Some((end_line, mut before_end)) = closing_paren(index, lines) else {
        reporter.report_line(index, Category::Syntax, "Unable to find the end of this command");
        return;
    };

    if end_line != index {
        let indent = leading_spaces(lines.text(end_line));
        if before_end >= indent {
            before_end -= indent;
        }
    }

    if after_open != before_end {
        reporter.report_line(
            index,
            Category::WhitespaceMismatch,
            "Mismatching spaces inside () after command",
        );
    }
}

/// `else(expr)`, `endif(expr)` and friends only repeat what the opening command said.
pub fn check_repeat_logic(index: usize, lines: &CleansedLines, reporter: &mut Reporter<'_>) {
    let text = lines.text(index);
    let lower = text.to_lowercase();
    let Some((closing, _)) = CLOSING_WORDS.iter().find(|(_, re)| re.is_match(&lower)) else {
        return;
    };

    if let Some(name) = WITH_ARGUMENTS.captures(text).and_then(|caps| caps.get(1)) {
        reporter.report_line(
            index,
            Category::ReadabilityLogic,
            format!(
                "Expression repeated inside {closing}; better to use only {}()",
                name.as_str()
            ),
        );
    }
}

/// Find the `)` balancing the command's `(` on line `start`, searching forward
/// across lines. Returns its line and the whitespace count right before it.
fn closing_paren(start: usize, lines: &CleansedLines) -> Option<(usize, usize)> {
    let open = lines.text(start).find('(')?;
    let mut depth = 0usize;

    for line in lines.line_numbers().skip(start) {
        let text = lines.text(line);
        let from = if line == start { open } else { 0 };
        for (offset, ch) in text[from..].char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        let padding = text[..from + offset]
                            .chars()
                            .rev()
                            .take_while(|c| c.is_whitespace())
                            .count();
                        return Some((line, padding));
                    }
                }
                _ => {}
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
