mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, USER_CONFIG_NAME};
pub use model::{
    ConfigLayer, ConfigLocation, DEFAULT_LINE_LENGTH, DEFAULT_SPACES, DISABLED_CONFIG_SENTINEL,
    LintConfig, parse_positive,
};

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
