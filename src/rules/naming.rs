//! File-name conventions.

use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::Reporter;
use crate::filter::Category;

static FIND_MODULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Find(.*)\.cmake$").expect("Invalid regex"));

const PROJECT_FILE: &str = "CMakeLists.txt";

fn base_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map_or(Cow::Borrowed(""), |name| name.to_string_lossy())
}

/// At least one cased character and no lowercase ones.
fn is_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

/// Whether `path` names something this linter checks: a `.cmake` script or a
/// project file in any casing.
#[must_use]
pub fn is_valid_file(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".cmake")
        || base_name(path).to_lowercase() == PROJECT_FILE.to_lowercase()
}

/// Whether `path` is a package Find module.
#[must_use]
pub fn is_find_package(path: &Path) -> bool {
    base_name(path).starts_with("Find") && path.to_string_lossy().ends_with(".cmake")
}

/// Variable a Find module should hand to the standard-args helper:
/// `FindFoo.cmake` expects `FOO`.
#[must_use]
pub fn expected_package_var(path: &Path) -> Option<String> {
    let name = base_name(path);
    name.strip_prefix("Find")
        .and_then(|rest| rest.strip_suffix(".cmake"))
        .map(str::to_uppercase)
}

pub fn check_file_name(path: &Path, reporter: &mut Reporter<'_>) {
    let name = base_name(path);

    if let Some(package) = FIND_MODULE.captures(&name).and_then(|caps| caps.get(1)) {
        let package = package.as_str();
        if !is_upper(package) {
            reporter.report_file(
                Category::ConventionFilename,
                format!(
                    "Find modules should use uppercase names; consider using Find{}.cmake",
                    package.to_uppercase()
                ),
            );
        }
    } else if name.to_lowercase() == PROJECT_FILE.to_lowercase() && name != PROJECT_FILE {
        reporter.report_file(
            Category::ConventionFilename,
            "File should be called CMakeLists.txt",
        );
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
