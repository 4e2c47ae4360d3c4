pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod filter;
pub mod lines;
pub mod linter;
pub mod output;
pub mod rules;
pub mod scanner;

pub use error::{CmakeLintError, Result};
pub use linter::{LintOutcome, Linter};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERRORS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
