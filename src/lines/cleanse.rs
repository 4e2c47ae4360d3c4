use std::ops::Range;

/// Where a line starts relative to multi-line constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanState {
    /// Plain code.
    #[default]
    Code,
    /// Inside a double-quoted string opened on an earlier line.
    Quoted,
    /// Inside a `#[=*[` bracket comment; `level` counts the `=` signs.
    BracketComment { level: usize },
}

/// Result of cleaning one physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedLine {
    /// Line text with comments and quoted content removed.
    pub text: String,
    /// Text of the trailing line comment after `#`, if one was stripped.
    pub comment: Option<String>,
    /// State the next line starts in.
    pub next: CleanState,
}

/// Remove comments from `line`, given the state carried over from the previous line.
///
/// Quote characters are kept but the quoted content is dropped, so
/// `file(APPEND x "#endif")` cleans to `file(APPEND x "")`. A quote preceded by a
/// backslash never toggles the string state.
#[must_use]
pub fn clean_line(line: &str, state: CleanState) -> CleanedLine {
    let (line, quoted) = match state {
        CleanState::BracketComment { level } => {
            let Some(rest) = after_bracket_end(line, level) else {
                return CleanedLine {
                    text: String::new(),
                    comment: None,
                    next: state,
                };
            };
            (rest, false)
        }
        CleanState::Quoted => (line, true),
        CleanState::Code => (line, false),
    };

    if !line.contains('#') && !line.contains('"') {
        let text = if quoted { String::new() } else { line.to_string() };
        let next = if quoted {
            CleanState::Quoted
        } else {
            CleanState::Code
        };
        return CleanedLine {
            text,
            comment: None,
            next,
        };
    }

    scan(line, quoted)
}

fn scan(line: &str, mut quoted: bool) -> CleanedLine {
    let mut text = String::with_capacity(line.len());
    let mut comment = None;
    let mut next = None;
    let mut prev = '\0';

    for (idx, ch) in line.char_indices() {
        if ch == '"' {
            if prev != '\\' {
                quoted = !quoted;
                text.push(ch);
            }
        } else if ch == '#' && !quoted {
            let rest = &line[idx + 1..];
            let Some((level, opener_len)) = bracket_open(rest) else {
                comment = Some(rest.to_string());
                break;
            };
            let body = &rest[opener_len..];
            let Some(after) = after_bracket_end(body, level) else {
                comment = Some(rest.to_string());
                next = Some(CleanState::BracketComment { level });
                break;
            };
            // Inline bracket comment: resume scanning after its close.
            let tail = clean_line(after, CleanState::Code);
            text.push_str(&tail.text);
            return CleanedLine {
                text: text.trim_end().to_string(),
                comment: tail.comment,
                next: tail.next,
            };
        } else if !quoted {
            text.push(ch);
        }
        prev = ch;
    }

    let next = next.unwrap_or(if quoted {
        CleanState::Quoted
    } else {
        CleanState::Code
    });
    CleanedLine {
        text: text.trim_end().to_string(),
        comment,
        next,
    }
}

/// Match `[=*[` at the start of `s`, returning the level and opener length.
fn bracket_open(s: &str) -> Option<(usize, usize)> {
    let rest = s.strip_prefix('[')?;
    let level = rest.chars().take_while(|c| *c == '=').count();
    rest[level..]
        .starts_with('[')
        .then_some((level, level + 2))
}

/// Text following the `]=*]` terminator of a bracket comment, if present.
fn after_bracket_end(s: &str, level: usize) -> Option<&str> {
    let marker = format!("]{}]", "=".repeat(level));
    s.find(&marker).map(|pos| &s[pos + marker.len()..])
}

/// One cleansed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleansedLine {
    /// 0-based index of the physical line this came from.
    pub index: usize,
    pub text: String,
    pub comment: Option<String>,
    /// A quoted string is still open at the end of this line.
    pub in_string: bool,
    /// The line starts inside a bracket comment opened on an earlier line.
    pub in_comment: bool,
}

/// The cleansed view of a whole file, parallel to its raw lines.
///
/// Computed once per file and shared by every rule.
#[derive(Debug, Clone)]
pub struct CleansedLines {
    raw: Vec<String>,
    lines: Vec<CleansedLine>,
}

impl CleansedLines {
    #[must_use]
    pub fn new<S: AsRef<str>>(raw_lines: &[S]) -> Self {
        let mut state = CleanState::Code;
        let mut lines = Vec::with_capacity(raw_lines.len());
        for (index, raw) in raw_lines.iter().enumerate() {
            let cleaned = clean_line(raw.as_ref(), state);
            let in_comment = matches!(state, CleanState::BracketComment { .. });
            state = cleaned.next;
            lines.push(CleansedLine {
                index,
                text: cleaned.text,
                comment: cleaned.comment,
                in_string: state == CleanState::Quoted,
                in_comment,
            });
        }
        Self {
            raw: raw_lines.iter().map(|l| l.as_ref().to_string()).collect(),
            lines,
        }
    }

    /// Valid line indices. Each call yields a fresh sequence.
    #[must_use]
    pub const fn line_numbers(&self) -> Range<usize> {
        0..self.lines.len()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Cleansed text of line `index`.
    #[must_use]
    pub fn text(&self, index: usize) -> &str {
        &self.lines[index].text
    }

    /// Raw text of line `index`, without its line terminator.
    #[must_use]
    pub fn raw(&self, index: usize) -> &str {
        &self.raw[index]
    }

    #[must_use]
    pub fn line(&self, index: usize) -> &CleansedLine {
        &self.lines[index]
    }
}

#[cfg(test)]
#[path = "cleanse_tests.rs"]
mod tests;
