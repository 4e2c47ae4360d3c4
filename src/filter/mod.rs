//! Category filters.
//!
//! A filter list is an ordered sequence of `+category` / `-category` entries.
//! The last entry addressing a category decides whether it is reported;
//! categories no entry addresses are reported.
//!
//! [`FilterRegistry`] keeps two layers: the persistent filters coming from
//! defaults, the config file and the command line, and a pragma layer fed by
//! `# lint_cmake:` comments that lives only until the end of the current file.

mod category;

pub use category::{Category, covers};

use std::fmt;

use thiserror::Error;

/// A malformed filter token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Filter should start with - or +")]
    MissingSign,

    #[error("Filter not allowed: {0}")]
    NotAllowed(String),
}

/// One `+category` or `-category` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub enabled: bool,
    pub category: String,
}

impl FilterEntry {
    /// Parse a single filter token such as `-whitespace/eol`.
    ///
    /// # Errors
    /// Returns an error if the token has no leading sign or names no known category.
    pub fn parse(token: &str) -> Result<Self, FilterError> {
        let token = token.trim();
        let (enabled, category) = if let Some(rest) = token.strip_prefix('+') {
            (true, rest)
        } else if let Some(rest) = token.strip_prefix('-') {
            (false, rest)
        } else {
            return Err(FilterError::MissingSign);
        };

        if !Category::ALL
            .iter()
            .any(|known| covers(category, known.as_str()))
        {
            return Err(FilterError::NotAllowed(token.to_string()));
        }

        Ok(Self {
            enabled,
            category: category.to_string(),
        })
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        covers(&self.category, category)
    }
}

impl fmt::Display for FilterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.enabled { '+' } else { '-' };
        write!(f, "{sign}{}", self.category)
    }
}

/// Parse a comma-separated filter list. Empty items are skipped.
///
/// Either every token parses or nothing is returned.
///
/// # Errors
/// Returns the first malformed token's error.
pub fn parse_filter_list(spec: &str) -> Result<Vec<FilterEntry>, FilterError> {
    spec.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(FilterEntry::parse)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRegistry {
    persistent: Vec<FilterEntry>,
    pragma: Vec<FilterEntry>,
}

impl FilterRegistry {
    #[must_use]
    pub const fn new(persistent: Vec<FilterEntry>) -> Self {
        Self {
            persistent,
            pragma: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self, category: &str) -> bool {
        self.persistent
            .iter()
            .chain(&self.pragma)
            .rev()
            .find(|entry| entry.matches(category))
            .is_none_or(|entry| entry.enabled)
    }

    /// Append the filters of one pragma directive to the file-scoped layer.
    ///
    /// # Errors
    /// Returns an error, leaving the layer untouched, if any token is malformed.
    pub fn push_pragma(&mut self, spec: &str) -> Result<usize, FilterError> {
        let entries = parse_filter_list(spec)?;
        let added = entries.len();
        self.pragma.extend(entries);
        Ok(added)
    }

    /// Drop every pragma filter; called once a file has been scanned.
    pub fn clear_pragmas(&mut self) {
        self.pragma.clear();
    }

    #[cfg(test)]
    pub fn persistent(&self) -> &[FilterEntry] {
        &self.persistent
    }

    #[cfg(test)]
    pub fn pragmas(&self) -> &[FilterEntry] {
        &self.pragma
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
