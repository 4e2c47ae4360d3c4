use std::path::{Path, PathBuf};

use crate::error::{CmakeLintError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{ConfigLayer, ConfigLocation};

/// Name of the per-user rc file in the home directory.
pub const USER_CONFIG_NAME: &str = ".cmakelintrc";

/// Trait for loading the config-file layer.
pub trait ConfigLoader {
    /// Load the settings found at `location`.
    ///
    /// # Errors
    /// Returns an error if an explicitly named file cannot be read, or if any
    /// file that is read cannot be parsed.
    fn load(&self, location: &ConfigLocation) -> Result<ConfigLayer>;
}

/// Loads the config layer from the filesystem.
///
/// Files ending in `.toml` are parsed as TOML; anything else uses the rc format.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// The file `location` points at, if any.
    #[must_use]
    pub fn resolve_path(&self, location: &ConfigLocation) -> Option<PathBuf> {
        match location {
            ConfigLocation::Default => self.fs.home_dir().map(|home| home.join(USER_CONFIG_NAME)),
            ConfigLocation::Path(path) => Some(path.clone()),
            ConfigLocation::Disabled => None,
        }
    }

    fn read(&self, path: &Path) -> Result<ConfigLayer> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| CmakeLintError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Loaded config file: {}", path.display());

        if path.extension().is_some_and(|ext| ext == "toml") {
            ConfigLayer::from_toml(&content)
        } else {
            ConfigLayer::from_rc(&content)
        }
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, location: &ConfigLocation) -> Result<ConfigLayer> {
        let Some(path) = self.resolve_path(location) else {
            tracing::debug!("Config file lookup disabled");
            return Ok(ConfigLayer::default());
        };

        if *location == ConfigLocation::Default && !self.fs.is_file(&path) {
            tracing::debug!("No user config at {}", path.display());
            return Ok(ConfigLayer::default());
        }

        self.read(&path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
