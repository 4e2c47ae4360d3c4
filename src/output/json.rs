use serde::Serialize;

use crate::diagnostic::Diagnostic;
use crate::error::Result;

use super::{LintReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    diagnostics: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    errors: usize,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    path: String,
    line: usize,
    category: &'static str,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &LintReport<'_>) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files: report.files,
                errors: report.error_count(),
            },
            diagnostics: report.diagnostics.iter().map(convert_diagnostic).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_diagnostic(diagnostic: &Diagnostic) -> JsonDiagnostic {
    JsonDiagnostic {
        path: diagnostic.path.display().to_string(),
        line: diagnostic.line,
        category: diagnostic.category.as_str(),
        message: diagnostic.message.clone(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
