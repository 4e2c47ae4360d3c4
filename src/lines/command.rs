//! Recognizing command invocations in cleansed lines.

use std::sync::LazyLock;

use regex::Regex;

use super::CleansedLines;

/// `identifier (` at the start of a line; group 2 is the gap before `(`.
static COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)(\s*)\(").expect("Invalid regex"));

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("Invalid regex"));

/// A command invocation found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandMatch<'a> {
    pub name: &'a str,
    /// Whitespace between the name and its `(`.
    pub gap: &'a str,
}

/// Casing convention of a command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCase {
    Upper,
    Lower,
}

#[must_use]
pub fn match_command(line: &str) -> Option<CommandMatch<'_>> {
    let caps = COMMAND.captures(line)?;
    Some(CommandMatch {
        name: caps.get(1)?.as_str(),
        gap: caps.get(2).map_or("", |m| m.as_str()),
    })
}

#[must_use]
pub fn contains_command(line: &str) -> bool {
    COMMAND.is_match(line)
}

/// Name of the command invoked on `line`, or `""` when there is none.
#[must_use]
pub fn command_name(line: &str) -> &str {
    match_command(line).map_or("", |m| m.name)
}

#[must_use]
pub fn is_upper_case(command: &str) -> bool {
    command == command.to_uppercase()
}

#[must_use]
pub fn is_mixed_case(command: &str) -> bool {
    command != command.to_lowercase() && command != command.to_uppercase()
}

#[must_use]
pub fn command_case(command: &str) -> CommandCase {
    if is_upper_case(command) {
        CommandCase::Upper
    } else {
        CommandCase::Lower
    }
}

/// First argument token of the command invoked on line `start`.
///
/// Words equal to the command name are skipped, and the search continues onto
/// following lines when the argument list is broken across lines. Comments are
/// already gone from cleansed lines, so they never yield an argument.
#[must_use]
pub fn command_argument(lines: &CleansedLines, start: usize) -> Option<String> {
    if start >= lines.len() {
        return None;
    }
    let skip = command_name(lines.text(start));
    (start..lines.len())
        .flat_map(|index| WORD.find_iter(lines.text(index)))
        .map(|m| m.as_str())
        .find(|word| *word != skip)
        .map(str::to_string)
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
