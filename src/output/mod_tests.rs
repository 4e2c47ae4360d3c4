use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_from_str_invalid() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, "Unknown output format: sarif");
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn report_error_count_is_diagnostic_count() {
    let report = LintReport {
        diagnostics: &[],
        files: 3,
    };
    assert_eq!(report.error_count(), 0);
}
