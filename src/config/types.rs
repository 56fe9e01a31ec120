//! Settings types and their validation, plus lookup defaults.

use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::Locale;
use crate::resource::DirectoryResolver;

/// One invalid settings field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "bundledLocales[0]")
    pub field_path: String,
    /// What is wrong and how to fix it
    pub message: String,
}

impl ValidationError {
    /// Creates an error for the field at `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Failure to produce usable settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more fields were invalid; all of them are listed
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file could not be read
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file was not valid JSON for [`LocalizerSettings`]
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Renders one numbered line per validation error.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Localizer settings as read from a JSON settings file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizerSettings {
    /// Locale used when a lookup names none.
    /// If unset, the process locale (`LC_ALL` / `LC_MESSAGES` / `LANG`) is used.
    pub default_locale: Option<String>,

    /// Locale consulted when the requested locale has no table at all.
    pub fallback_locale: String,

    /// Locales whose bundled tables are loaded at startup.
    pub bundled_locales: Vec<String>,

    /// Directory holding the bundled `<language>.json` files.
    pub resource_dir: Option<PathBuf>,
}

impl Default for LocalizerSettings {
    fn default() -> Self {
        Self {
            default_locale: None,
            fallback_locale: "en".to_string(),
            bundled_locales: Vec::new(),
            resource_dir: None,
        }
    }
}

impl LocalizerSettings {
    /// Collects every invalid field instead of stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(locale) = &self.default_locale
            && Locale::parse(locale).is_err()
        {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!("Invalid locale '{locale}'. Example: \"en-US\", or remove this field"),
            ));
        }

        if Locale::parse(&self.fallback_locale).is_err() {
            errors.push(ValidationError::new(
                "fallbackLocale",
                format!("Invalid locale '{}'. Example: \"en\"", self.fallback_locale),
            ));
        }

        for (index, locale) in self.bundled_locales.iter().enumerate() {
            if Locale::parse(locale).is_err() {
                errors.push(ValidationError::new(
                    format!("bundledLocales[{index}]"),
                    format!("Invalid locale '{locale}'"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Resolver over `resourceDir`, for bundled tables kept on disk.
    ///
    /// Only needed when tables are not embedded; an unset `resourceDir` is an
    /// error here rather than in [`validate`](Self::validate).
    pub fn directory_resolver(&self) -> Result<DirectoryResolver, ValidationError> {
        self.resource_dir.as_ref().map(DirectoryResolver::new).ok_or_else(|| {
            ValidationError::new(
                "resourceDir",
                "A resource directory is required to resolve bundled locales from disk",
            )
        })
    }

    /// Lookup defaults described by these settings.
    #[must_use]
    pub fn message_defaults(&self) -> MessageDefaults {
        MessageDefaults {
            locale: self.default_locale.as_deref().map_or_else(Locale::from_env, Locale::new),
            fallback: Locale::new(&self.fallback_locale),
        }
    }

    /// Parsed `bundledLocales`, skipping invalid entries.
    #[must_use]
    pub fn bundled(&self) -> Vec<Locale> {
        self.bundled_locales.iter().filter_map(|tag| Locale::parse(tag).ok()).collect()
    }
}

/// Locales applied when a lookup does not name them explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDefaults {
    /// Requested locale for `message` / `format`.
    pub locale: Locale,
    /// Fallback locale for every lookup that does not pass one.
    pub fallback: Locale,
}

impl MessageDefaults {
    /// Process locale, falling back to English.
    #[must_use]
    pub fn from_env() -> Self {
        Self { locale: Locale::from_env(), fallback: Locale::english() }
    }
}

impl Default for MessageDefaults {
    fn default() -> Self {
        Self::from_env()
    }
}
