#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the cmakelint binary.
#[macro_export]
macro_rules! cmakelint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("cmakelint"))
    };
}

/// A project directory plus a separate home directory, so the user's real
/// `~/.cmakelintrc` never leaks into a test.
pub struct TestFixture {
    pub dir: TempDir,
    pub home: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            home: TempDir::new().expect("Failed to create home directory"),
        }
    }

    /// Creates a file with the given content in the project directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `~/.cmakelintrc` in the fixture's home directory.
    pub fn create_user_config(&self, content: &str) {
        fs::write(self.home.path().join(".cmakelintrc"), content)
            .expect("Failed to write user config");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Command running inside the project directory with the fixture's home.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = cmakelint!();
        cmd.current_dir(self.path())
            .env("HOME", self.home.path())
            .env("USERPROFILE", self.home.path())
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A small, clean project file.
pub const CLEAN_CMAKELISTS: &str = "\
cmake_minimum_required(VERSION 3.10)
project(demo)

if(WIN32)
  add_definitions(-DWIN)
endif()
";

/// A Find module following every package convention.
pub const CLEAN_FIND_MODULE: &str = "\
include(FindPackageHandleStandardArgs)
find_package_handle_standard_args(FOO DEFAULT_MSG FOO_LIBRARY)
";
