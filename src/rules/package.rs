use crate::diagnostic::Reporter;
use crate::filter::Category;
use crate::lines::{CleansedLines, command_argument, command_name};

const STD_ARGS_MODULE: &str = "FindPackageHandleStandardArgs";
const STD_ARGS_COMMAND: &str = "find_package_handle_standard_args";

/// What a Find module has done so far with the standard-args helper.
///
/// Created empty for each file, fed every line, and consumed by [`Self::done`]
/// once the file has been scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageState {
    included: bool,
    /// `(line index, variable)` for every standard-args call.
    std_args: Vec<(usize, String)>,
}

impl PackageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, index: usize, lines: &CleansedLines) {
        let command = command_name(lines.text(index)).to_lowercase();
        if command == "include" {
            if command_argument(lines, index).as_deref() == Some(STD_ARGS_MODULE) {
                self.included = true;
            }
        } else if command == STD_ARGS_COMMAND {
            let var = command_argument(lines, index).unwrap_or_default();
            self.std_args.push((index, var));
        }
    }

    /// Emit the deferred checks. `expected` is the variable the file name implies.
    pub fn done(self, expected: &str, reporter: &mut Reporter<'_>) {
        if !self.included {
            reporter.report_file(
                Category::PackageConsistency,
                "Package should include FindPackageHandleStandardArgs",
            );
        }
        if self.std_args.is_empty() {
            reporter.report_file(
                Category::PackageConsistency,
                "Package should use FIND_PACKAGE_HANDLE_STANDARD_ARGS",
            );
        }
        for (index, var) in self.std_args {
            if var != expected {
                reporter.report_line(
                    index,
                    Category::PackageStdargs,
                    format!("Weird variable passed to std args, should be {expected} not {var}"),
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "package_tests.rs"]
mod tests;
