//! Errors raised while loading translation tables.

use std::path::PathBuf;

use thiserror::Error;

use crate::locale::Locale;

/// Defines errors that may occur while loading translations
#[derive(Error, Debug)]
pub enum LocalizerError {
    /// Content was not JSON, or not a flat object of string values
    #[error("Failed to decode translations for locale '{locale}': {source}")]
    Decode {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    /// A translation file could not be read
    #[error("Failed to read translation file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resolver has no resource under this name
    #[error("Bundled resource not found: {0}")]
    ResourceNotFound(String),

    /// A locale identifier was empty or malformed
    #[error("Invalid locale: '{0}'")]
    InvalidLocale(String),
}
