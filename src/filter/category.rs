use std::fmt;

/// Diagnostic categories, addressed by filters as slash-delimited paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ConventionFilename,
    LineLength,
    PackageConsistency,
    PackageStdargs,
    ReadabilityLogic,
    ReadabilityMixedCase,
    ReadabilityWonkyCase,
    Syntax,
    WhitespaceEol,
    WhitespaceExtra,
    WhitespaceIndent,
    WhitespaceMismatch,
    WhitespaceNewline,
    WhitespaceTabs,
}

impl Category {
    pub const ALL: [Self; 14] = [
        Self::ConventionFilename,
        Self::LineLength,
        Self::PackageConsistency,
        Self::PackageStdargs,
        Self::ReadabilityLogic,
        Self::ReadabilityMixedCase,
        Self::ReadabilityWonkyCase,
        Self::Syntax,
        Self::WhitespaceEol,
        Self::WhitespaceExtra,
        Self::WhitespaceIndent,
        Self::WhitespaceMismatch,
        Self::WhitespaceNewline,
        Self::WhitespaceTabs,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConventionFilename => "convention/filename",
            Self::LineLength => "linelength",
            Self::PackageConsistency => "package/consistency",
            Self::PackageStdargs => "package/stdargs",
            Self::ReadabilityLogic => "readability/logic",
            Self::ReadabilityMixedCase => "readability/mixedcase",
            Self::ReadabilityWonkyCase => "readability/wonkycase",
            Self::Syntax => "syntax",
            Self::WhitespaceEol => "whitespace/eol",
            Self::WhitespaceExtra => "whitespace/extra",
            Self::WhitespaceIndent => "whitespace/indent",
            Self::WhitespaceMismatch => "whitespace/mismatch",
            Self::WhitespaceNewline => "whitespace/newline",
            Self::WhitespaceTabs => "whitespace/tabs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `prefix` addresses `category`: empty, exact, or a prefix ending at a `/`.
#[must_use]
pub fn covers(prefix: &str, category: &str) -> bool {
    if prefix.is_empty() || prefix == category {
        return true;
    }
    category.strip_prefix(prefix).is_some_and(|rest| {
        rest.starts_with('/') || prefix.ends_with('/')
    })
}
