mod cleanse;
mod command;

pub use cleanse::{CleanState, CleanedLine, CleansedLine, CleansedLines, clean_line};
pub use command::{
    CommandCase, CommandMatch, command_argument, command_case, command_name, contains_command,
    is_mixed_case, is_upper_case, match_command,
};

/// Split file content into physical lines the way a line-reader does:
/// a trailing newline does not start an extra line, and a `\r` before the
/// newline is removed. The second value reports whether any `\r` was removed.
#[must_use]
pub fn split_lines(source: &str) -> (Vec<&str>, bool) {
    let mut saw_cr = false;
    let lines = source
        .split_terminator('\n')
        .map(|line| {
            line.strip_suffix('\r').map_or(line, |stripped| {
                saw_cr = true;
                stripped
            })
        })
        .collect();
    (lines, saw_cr)
}
