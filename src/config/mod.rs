//! Localizer settings and lookup defaults.

/// Settings file loader
mod loader;
/// Configuration types and settings
mod types;

use std::path::Path;

pub use types::{
    ConfigError,
    LocalizerSettings,
    MessageDefaults,
    ValidationError,
};

/// Reads and validates a JSON settings file.
pub fn load_from_file(path: &Path) -> Result<LocalizerSettings, ConfigError> {
    loader::load_from_file(path)
}

/// Reads a JSON settings file if present, otherwise returns the defaults.
pub fn load_or_default(path: &Path) -> Result<LocalizerSettings, ConfigError> {
    loader::load_or_default(path)
}
