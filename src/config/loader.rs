//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    LocalizerSettings,
};

/// Reads and validates a JSON settings file.
///
/// # Returns
/// - `Ok(settings)`: the file was read, parsed and validated
/// - `Err(ConfigError)`: read, parse or validation failure
pub(super) fn load_from_file(config_path: &Path) -> Result<LocalizerSettings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let settings: LocalizerSettings = serde_json::from_str(&content)?;

    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(settings)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub(super) fn load_or_default(config_path: &Path) -> Result<LocalizerSettings, ConfigError> {
    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(LocalizerSettings::default());
    }

    load_from_file(config_path)
}
