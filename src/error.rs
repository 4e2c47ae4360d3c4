use std::path::PathBuf;

use thiserror::Error;

use crate::filter::FilterError;

#[derive(Error, Debug)]
pub enum CmakeLintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidFilter(#[from] FilterError),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read configuration file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No files were specified!")]
    NoInputFiles,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CmakeLintError {
    /// Short, stable name of the error kind, used in log events.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::InvalidFilter(_) => "Filter",
            Self::NoInputFiles => "Usage",
            Self::FileRead { .. } | Self::ConfigRead { .. } | Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, CmakeLintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
