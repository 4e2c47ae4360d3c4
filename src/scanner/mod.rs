mod filter;

pub use filter::{CmakeFileFilter, FileFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();
        files.sort();
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

/// Expand command-line paths into the files to lint.
///
/// Directories are replaced by the lintable files beneath them; any other path
/// is kept as given so the linter can read or ignore it.
///
/// # Errors
/// Returns an error if a directory cannot be scanned.
pub fn collect_targets<S: FileScanner>(scanner: &S, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut targets = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = scanner.scan(path)?;
            tracing::debug!("Found {} file(s) under {}", found.len(), path.display());
            targets.extend(found);
        } else {
            targets.push(path.clone());
        }
    }
    Ok(targets)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
