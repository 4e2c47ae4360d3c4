use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigLayer, ConfigLocation, parse_positive};
use crate::error::Result;
use crate::filter::parse_filter_list;
use crate::output::OutputFormat;

/// Default file linted when no paths are given.
pub const DEFAULT_FILENAME: &str = "CMakeLists.txt";

#[derive(Parser, Debug)]
#[command(name = "cmakelint")]
#[command(author, version, about = "Check CMake files for style issues")]
#[command(long_about = "Check CMake files for style issues.\n\n\
    Settings are read from ~/.cmakelintrc unless --config says otherwise.\n\n\
    Exit codes:\n  \
    0 - No errors found\n  \
    1 - Style errors found\n  \
    2 - Usage, configuration or runtime error")]
pub struct Cli {
    /// Files or directories to lint [default: ./CMakeLists.txt]
    pub paths: Vec<PathBuf>,

    /// Category filters, e.g. -whitespace,+whitespace/tabs. An empty value lists the categories
    #[arg(long, value_name = "-X,+Y", allow_hyphen_values = true)]
    pub filter: Option<String>,

    /// Config file to read, or None to skip config files
    #[arg(long, value_name = "CONFIG")]
    pub config: Option<String>,

    /// Indentation unit in spaces
    #[arg(long, value_parser = positive_number)]
    pub spaces: Option<usize>,

    /// Maximum line length
    #[arg(long, value_parser = positive_number)]
    pub linelength: Option<usize>,

    /// Print only the error total
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format [possible values: text, json]
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// `--filter=` with nothing after it asks for the category list.
    #[must_use]
    pub fn wants_category_list(&self) -> bool {
        self.filter.as_deref().is_some_and(|f| f.trim().is_empty())
    }

    #[must_use]
    pub fn config_location(&self) -> ConfigLocation {
        ConfigLocation::from_arg(self.config.as_deref())
    }

    /// Settings given on the command line, as a layer over the config file.
    ///
    /// # Errors
    /// Returns an error if `--filter` holds a malformed token.
    pub fn config_layer(&self) -> Result<ConfigLayer> {
        let filters = match &self.filter {
            Some(spec) => parse_filter_list(spec)?,
            None => Vec::new(),
        };
        Ok(ConfigLayer {
            filters,
            spaces: self.spaces,
            line_length: self.linelength,
            quiet: self.quiet,
        })
    }
}

fn positive_number(value: &str) -> std::result::Result<usize, String> {
    parse_positive("value", value).map_err(|_| format!("'{value}' is not a positive integer"))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
