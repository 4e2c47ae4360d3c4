use std::path::Path;

use crate::rules::is_valid_file;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts `*.cmake` scripts and `CMakeLists.txt` in any casing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmakeFileFilter;

impl FileFilter for CmakeFileFilter {
    fn should_include(&self, path: &Path) -> bool {
        is_valid_file(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
