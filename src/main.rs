use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cmakelint::cli::{Cli, DEFAULT_FILENAME};
use cmakelint::config::{ConfigLoader, FileConfigLoader, LintConfig};
use cmakelint::filter::Category;
use cmakelint::output::{JsonFormatter, LintReport, OutputFormat, OutputFormatter, TextFormatter};
use cmakelint::scanner::{CmakeFileFilter, DirectoryScanner, collect_targets};
use cmakelint::{CmakeLintError, EXIT_CONFIG_ERROR, EXIT_ERRORS_FOUND, EXIT_SUCCESS};
use cmakelint::{LintOutcome, Linter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    std::process::exit(run(&cli));
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!("Fatal {} error", e.error_type());
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> cmakelint::Result<i32> {
    if cli.wants_category_list() {
        for category in Category::ALL {
            println!("  {category}");
        }
        return Ok(EXIT_SUCCESS);
    }

    // 1. Settings: defaults, then config file, then command line
    let cli_layer = cli.config_layer()?;
    let file_layer = FileConfigLoader::new().load(&cli.config_location())?;
    let config = LintConfig::layered(file_layer, cli_layer);
    tracing::debug!("Effective config: {config:?}");

    // 2. Files to lint
    let paths = resolve_paths(&cli.paths)?;
    let scanner = DirectoryScanner::new(CmakeFileFilter);
    let targets = collect_targets(&scanner, &paths)?;

    // 3. Lint, streaming text diagnostics as each file completes
    let text = TextFormatter::new(config.quiet);
    let mut linter = Linter::new(config);
    let mut all = Vec::new();
    for path in &targets {
        match linter.lint_file(path)? {
            LintOutcome::Ignored => println!("Ignoring file: {}", path.display()),
            LintOutcome::Linted(diagnostics) => {
                if cli.format == OutputFormat::Text && !text.is_quiet() {
                    for diagnostic in &diagnostics {
                        eprintln!("{}", TextFormatter::format_diagnostic(diagnostic));
                    }
                }
                all.extend(diagnostics);
            }
        }
    }

    // 4. Summary
    match cli.format {
        OutputFormat::Text => {
            if let Some(total) = text.format_total(linter.error_count()) {
                eprintln!("{total}");
            }
        }
        OutputFormat::Json => {
            let report = LintReport {
                diagnostics: &all,
                files: linter.files_linted(),
            };
            println!("{}", JsonFormatter.format(&report)?);
        }
    }

    if linter.error_count() > 0 {
        Ok(EXIT_ERRORS_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Paths given on the command line, or `./CMakeLists.txt` when there are none.
fn resolve_paths(paths: &[PathBuf]) -> cmakelint::Result<Vec<PathBuf>> {
    if !paths.is_empty() {
        return Ok(paths.to_vec());
    }

    let default = Path::new(DEFAULT_FILENAME);
    if default.is_file() {
        Ok(vec![default.to_path_buf()])
    } else {
        Err(CmakeLintError::NoInputFiles)
    }
}
