use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::filter::parse_filter_list;

fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}

#[test]
fn empty_project_file_is_clean() {
    let mut linter = Linter::default();
    assert!(linter.lint_source(Path::new("CMakeLists.txt"), "").is_empty());
    assert_eq!(linter.error_count(), 0);
    assert_eq!(linter.files_linted(), 1);
}

#[test]
fn diagnostics_carry_path_line_and_category() {
    let mut linter = Linter::default();
    let diagnostics = linter.lint_source(Path::new("dir/CMakeLists.txt"), "project()\n\tset(FOO bar)\n");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].path, PathBuf::from("dir/CMakeLists.txt"));
    assert_eq!(diagnostics[0].line, 2);
    assert_eq!(diagnostics[0].category, Category::WhitespaceTabs);
}

#[test]
fn bracket_comment_body_is_not_indented_code() {
    let mut linter = Linter::default();
    let source = "#[[\n   three spaces of prose\n]]\nproject()\n";
    assert!(linter.lint_source(Path::new("CMakeLists.txt"), source).is_empty());
}

#[test]
fn nested_parentheses_balance_padding() {
    let mut linter = Linter::default();
    let source = "if( (A) AND B )\nendif()\n";
    assert!(linter.lint_source(Path::new("CMakeLists.txt"), source).is_empty());
}

#[test]
fn error_count_accumulates_across_files() {
    let mut linter = Linter::default();
    linter.lint_source(Path::new("a.cmake"), "foo() \n");
    linter.lint_source(Path::new("b.cmake"), "foo() \nbar() \n");
    assert_eq!(linter.error_count(), 3);
    assert_eq!(linter.files_linted(), 2);
}

#[test]
fn pragmas_do_not_leak_into_next_file() {
    let mut linter = Linter::default();
    let first = linter.lint_source(
        Path::new("a.cmake"),
        "# lint_cmake: -whitespace/eol\nfoo() \n",
    );
    assert!(first.is_empty());
    assert!(linter.filters().pragmas().is_empty());

    let second = linter.lint_source(Path::new("b.cmake"), "foo() \n");
    assert_eq!(messages(&second), vec!["Line ends in whitespace"]);
}

#[test]
fn casing_convention_is_per_file() {
    let mut linter = Linter::default();
    assert!(linter.lint_source(Path::new("a.cmake"), "project()\n").is_empty());
    assert!(
        linter
            .lint_source(Path::new("b.cmake"), "PROJECT()\n")
            .is_empty()
    );
}

#[test]
fn carriage_returns_are_reported_once() {
    let mut linter = Linter::default();
    let diagnostics = linter.lint_source(Path::new("a.cmake"), "foo()\r\nbar()\r\n");
    if cfg!(windows) {
        assert!(diagnostics.is_empty());
    } else {
        assert_eq!(
            messages(&diagnostics),
            vec!["Unexpected carriage return found; Better to use only \\n"]
        );
        assert_eq!(diagnostics[0].line, 0);
        assert_eq!(diagnostics[0].category, Category::WhitespaceNewline);
    }
}

#[test]
fn file_level_findings_come_first() {
    let mut linter = Linter::default();
    let diagnostics = linter.lint_source(Path::new("cmakelists.txt"), "foo() \n");
    assert_eq!(
        messages(&diagnostics),
        vec!["File should be called CMakeLists.txt", "Line ends in whitespace"]
    );
}

#[test]
fn configured_filters_are_applied() {
    let config = LintConfig {
        filters: parse_filter_list("-whitespace").unwrap(),
        ..LintConfig::default()
    };
    let mut linter = Linter::new(config);
    assert!(linter.lint_source(Path::new("a.cmake"), "\tfoo() \n").is_empty());
    assert_eq!(linter.error_count(), 0);
}

#[test]
fn reset_restores_defaults() {
    let config = LintConfig {
        filters: parse_filter_list("-whitespace").unwrap(),
        spaces: 4,
        line_length: 100,
        quiet: true,
    };
    let mut linter = Linter::new(config);
    linter.lint_source(Path::new("a.cmake"), "PrOjEct()\n");
    assert_eq!(linter.error_count(), 1);

    linter.reset();
    assert_eq!(linter.config(), &LintConfig::default());
    assert!(linter.filters().persistent().is_empty());
    assert_eq!(linter.error_count(), 0);
    assert_eq!(linter.files_linted(), 0);
}

#[test]
fn lint_file_reads_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("CMakeLists.txt");
    std::fs::write(&path, "project( foo)\n").unwrap();

    let mut linter = Linter::default();
    let LintOutcome::Linted(diagnostics) = linter.lint_file(&path).unwrap() else {
        panic!("expected the file to be linted");
    };
    assert_eq!(
        messages(&diagnostics),
        vec!["Mismatching spaces inside () after command"]
    );
}

#[test]
fn lint_file_ignores_other_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foobar.h.in");
    std::fs::write(&path, "\t\n").unwrap();

    let mut linter = Linter::default();
    assert_eq!(linter.lint_file(&path).unwrap(), LintOutcome::Ignored);
    assert_eq!(linter.files_linted(), 0);
}

#[test]
fn lint_file_missing_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut linter = Linter::default();
    let err = linter
        .lint_file(&dir.path().join("missing.cmake"))
        .unwrap_err();
    assert!(matches!(err, CmakeLintError::FileRead { .. }));
}
