//! Locale identifiers used as table keys.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::LocalizerError;

/// Environment variables consulted for the process locale, highest priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Designated base language.
const ENGLISH: &str = "en";

/// Normalized locale identifier (e.g. `en`, `en-us`, `fr-ca`).
///
/// Every constructor funnels through the same normalization, so two tags that
/// differ only in case, `_`/`-` separators or a POSIX encoding suffix are the
/// same key:
///
/// ```
/// use json_localizer::Locale;
///
/// assert_eq!(Locale::new("en_US.UTF-8"), Locale::new("EN-us"));
/// assert_eq!(Locale::new("fr-CA").language(), "fr");
/// assert_eq!(Locale::new("fr-CA").bundled_resource_name(), "fr.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Creates a locale from a trusted tag; empty tags map to English.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_else(|e| {
            tracing::debug!("{e}, substituting '{ENGLISH}'");
            Self::english()
        })
    }

    /// Parses a locale tag, rejecting empty input.
    pub fn parse(tag: &str) -> Result<Self, LocalizerError> {
        let normalized = normalize_tag(tag);
        if normalized.is_empty() || normalized.starts_with('-') {
            return Err(LocalizerError::InvalidLocale(tag.to_string()));
        }
        Ok(Self(normalized))
    }

    /// The designated base language used as the default fallback.
    #[must_use]
    pub fn english() -> Self {
        Self(ENGLISH.to_string())
    }

    /// Detects the process locale from `LC_ALL`, `LC_MESSAGES` and `LANG`.
    ///
    /// Unset or empty variables and the `C`/`POSIX` locales are skipped.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Locale::from_env`] with an injectable variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .filter(|value| !matches!(value.trim(), "" | "C" | "POSIX"))
            .find_map(|value| Self::parse(&value).ok())
            .unwrap_or_else(|| {
                tracing::trace!("No locale in environment, using '{ENGLISH}'");
                Self::english()
            })
    }

    /// The normalized tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`fr` for `fr-ca`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Name of the bundled resource for this locale: `<language>.json`.
    ///
    /// Region variants of one language share a resource.
    #[must_use]
    pub fn bundled_resource_name(&self) -> String {
        format!("{}.json", self.language())
    }
}

/// Lowercases, unifies separators to `-` and drops `.encoding` / `@modifier` suffixes.
fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim();
    let end = tag.find(['.', '@']).unwrap_or(tag.len());
    tag.get(..end).unwrap_or(tag).to_lowercase().replace('_', "-")
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = LocalizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocalizerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
