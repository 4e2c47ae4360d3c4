use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;
use crate::config::LintConfig;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    home_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            home_dir: Some(PathBuf::from("/home/user")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn without_home(mut self) -> Self {
        self.home_dir = None;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone()
    }
}

#[test]
fn default_location_resolves_to_home_rc() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    assert_eq!(
        loader.resolve_path(&ConfigLocation::Default),
        Some(PathBuf::from("/home/user/.cmakelintrc"))
    );
}

#[test]
fn default_location_missing_file_is_empty_layer() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let layer = loader.load(&ConfigLocation::Default).unwrap();
    assert_eq!(layer, ConfigLayer::default());
}

#[test]
fn default_location_without_home_is_empty_layer() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new().without_home());
    assert_eq!(loader.resolve_path(&ConfigLocation::Default), None);
    assert_eq!(
        loader.load(&ConfigLocation::Default).unwrap(),
        ConfigLayer::default()
    );
}

#[test]
fn default_location_reads_rc() {
    let fs = MockFileSystem::new().with_file("/home/user/.cmakelintrc", "spaces=4\nquiet\n");
    let loader = FileConfigLoader::with_fs(fs);
    let layer = loader.load(&ConfigLocation::Default).unwrap();
    assert_eq!(layer.spaces, Some(4));
    assert!(layer.quiet);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load(&ConfigLocation::Path(PathBuf::from("./foo/bar")))
        .unwrap_err();
    assert!(matches!(err, CmakeLintError::ConfigRead { .. }));
}

#[test]
fn disabled_location_ignores_existing_file() {
    let fs = MockFileSystem::new().with_file("/home/user/.cmakelintrc", "spaces=4");
    let loader = FileConfigLoader::with_fs(fs);
    assert_eq!(loader.resolve_path(&ConfigLocation::Disabled), None);
    assert_eq!(
        loader.load(&ConfigLocation::Disabled).unwrap(),
        ConfigLayer::default()
    );
}

#[test]
fn explicit_toml_file_is_parsed_as_toml() {
    let fs = MockFileSystem::new().with_file(
        "/project/lint.toml",
        "filter = \"-linelength\"\nlinelength = 120\n",
    );
    let loader = FileConfigLoader::with_fs(fs);
    let layer = loader
        .load(&ConfigLocation::Path(PathBuf::from("/project/lint.toml")))
        .unwrap();
    assert_eq!(layer.filters.len(), 1);
    assert_eq!(layer.line_length, Some(120));
}

#[test]
fn malformed_rc_is_an_error() {
    let fs = MockFileSystem::new().with_file("/home/user/.cmakelintrc", "filter=whitespace");
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load(&ConfigLocation::Default).unwrap_err();
    assert_eq!(err.to_string(), "Filter should start with - or +");
}

#[test]
fn loaded_layer_feeds_layered_config() {
    let fs = MockFileSystem::new().with_file("/home/user/.cmakelintrc", "filter=-,+whitespace");
    let loader = FileConfigLoader::with_fs(fs);
    let layer = loader.load(&ConfigLocation::Default).unwrap();
    let config = LintConfig::layered(layer, ConfigLayer::default());
    assert_eq!(config.filters.len(), 2);
}
