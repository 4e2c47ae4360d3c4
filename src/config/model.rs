use serde::Deserialize;

use crate::error::{CmakeLintError, Result};
use crate::filter::{FilterEntry, FilterError, parse_filter_list};

/// Default indentation unit, in spaces.
pub const DEFAULT_SPACES: usize = 2;

/// Default maximum line length, in characters.
pub const DEFAULT_LINE_LENGTH: usize = 80;

/// Command-line value that disables config file lookup.
pub const DISABLED_CONFIG_SENTINEL: &str = "None";

/// Effective settings for one lint session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    /// Persistent filters, in precedence order (later wins).
    pub filters: Vec<FilterEntry>,
    /// Indentation unit.
    pub spaces: usize,
    /// Maximum visible characters per line.
    pub line_length: usize,
    /// Print only the total error count.
    pub quiet: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            spaces: DEFAULT_SPACES,
            line_length: DEFAULT_LINE_LENGTH,
            quiet: false,
        }
    }
}

impl LintConfig {
    /// Restore built-in defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply a layer on top of the current settings.
    ///
    /// Filters are appended so the layer's entries take precedence; numeric
    /// settings are replaced when the layer sets them; `quiet` is sticky.
    pub fn apply(&mut self, layer: ConfigLayer) {
        self.filters.extend(layer.filters);
        if let Some(spaces) = layer.spaces {
            self.spaces = spaces;
        }
        if let Some(line_length) = layer.line_length {
            self.line_length = line_length;
        }
        self.quiet |= layer.quiet;
    }

    /// Build the effective config: defaults, then the config file, then the command line.
    #[must_use]
    pub fn layered(file: ConfigLayer, cli: ConfigLayer) -> Self {
        let mut config = Self::default();
        config.apply(file);
        config.apply(cli);
        config
    }
}

/// A partial set of settings contributed by one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    pub filters: Vec<FilterEntry>,
    pub spaces: Option<usize>,
    pub line_length: Option<usize>,
    pub quiet: bool,
}

impl ConfigLayer {
    /// Parse the line-oriented rc format:
    ///
    /// ```text
    /// # comment
    /// filter=-whitespace,+whitespace/tabs
    /// spaces=4
    /// linelength=100
    /// quiet
    /// ```
    ///
    /// # Errors
    /// Returns an error for unrecognized lines, bad numbers or bad filters.
    pub fn from_rc(content: &str) -> Result<Self> {
        let mut layer = Self::default();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line == "quiet" {
                layer.quiet = true;
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(CmakeLintError::Config(format!(
                    "line {}: unrecognized setting '{line}'",
                    index + 1
                )));
            };
            match key.trim() {
                "filter" => layer.filters = parse_filter_list(value)?,
                "spaces" => layer.spaces = Some(parse_positive("spaces", value)?),
                "linelength" => layer.line_length = Some(parse_positive("linelength", value)?),
                other => {
                    return Err(CmakeLintError::Config(format!(
                        "line {}: unknown setting '{other}'",
                        index + 1
                    )));
                }
            }
        }
        Ok(layer)
    }

    /// Parse the TOML form of the same settings.
    ///
    /// # Errors
    /// Returns an error for TOML syntax errors, unknown keys, bad numbers or bad filters.
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: TomlConfig = toml::from_str(content)?;
        let filters = match raw.filter {
            None => Vec::new(),
            Some(FilterValue::Joined(spec)) => parse_filter_list(&spec)?,
            Some(FilterValue::List(tokens)) => tokens
                .iter()
                .map(|token| FilterEntry::parse(token))
                .collect::<std::result::Result<Vec<_>, FilterError>>()?,
        };
        Ok(Self {
            filters,
            spaces: raw.spaces.map(|v| check_positive("spaces", v)).transpose()?,
            line_length: raw
                .linelength
                .map(|v| check_positive("linelength", v))
                .transpose()?,
            quiet: raw.quiet,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    filter: Option<FilterValue>,
    spaces: Option<usize>,
    linelength: Option<usize>,
    #[serde(default)]
    quiet: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FilterValue {
    List(Vec<String>),
    Joined(String),
}

/// Parse a strictly positive integer setting.
///
/// # Errors
/// Returns an error if `value` is not an integer greater than zero.
pub fn parse_positive(name: &str, value: &str) -> Result<usize> {
    let parsed = value
        .trim()
        .parse::<usize>()
        .map_err(|_| CmakeLintError::Config(format!("{name} expects an integer value")))?;
    check_positive(name, parsed)
}

fn check_positive(name: &str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(CmakeLintError::Config(format!(
            "{name} must be greater than zero"
        )));
    }
    Ok(value)
}

/// Where settings are read from before the command line is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigLocation {
    /// `~/.cmakelintrc`, skipped silently when absent.
    #[default]
    Default,
    /// An explicitly named file, which must be readable.
    Path(std::path::PathBuf),
    /// No config file at all.
    Disabled,
}

impl ConfigLocation {
    /// Interpret a `--config` argument; `None` (the literal word) disables lookup.
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Self::Default,
            Some(DISABLED_CONFIG_SENTINEL) => Self::Disabled,
            Some(path) => Self::Path(path.into()),
        }
    }
}
