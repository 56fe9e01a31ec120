//! In-memory translation store: bulk load per locale, lookup with fallback,
//! and placeholder formatting.
//!
//! # Lookup rules
//!
//! | Requested locale | Fallback locale | Result |
//! |------------------|-----------------|--------|
//! | table loaded | (ignored) | value, or `""` if the ID is absent |
//! | no table | table loaded | value, or `""` if the ID is absent |
//! | no table | no table | the ID itself |
//!
//! A loaded table for the requested locale short-circuits the fallback even
//! when it lacks the ID.

use std::collections::{
    HashMap,
    HashSet,
};
use std::fmt::Display;
use std::io::Read;
use std::path::Path;

use crate::config::{
    LocalizerSettings,
    MessageDefaults,
};
use crate::error::LocalizerError;
use crate::format::substitute;
use crate::locale::Locale;
use crate::resource::ResourceResolver;
use crate::table::TranslationTable;

/// Locale → message table, with at most one table per locale.
///
/// # Example
///
/// ```
/// use json_localizer::{Locale, MessageDefaults, TranslationStore};
///
/// let en = Locale::new("en");
/// let fr = Locale::new("fr");
/// let mut store = TranslationStore::with_defaults(MessageDefaults {
///     locale: fr.clone(),
///     fallback: en.clone(),
/// });
///
/// store.load_from_str(r#"{"greeting": "Hello {name}", "bye": "Bye"}"#, en.clone()).unwrap();
/// assert_eq!(store.message("greeting"), "Hello {name}");
///
/// store.load_from_str(r#"{"greeting": "Bonjour {name}"}"#, fr.clone()).unwrap();
/// assert_eq!(store.format("greeting", [("name", "Alice")]), "Bonjour Alice");
/// assert_eq!(store.message("bye"), "");
/// assert_eq!(store.get_message("unknown", &Locale::new("de"), &Locale::new("ja")), "unknown");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    /// Loaded tables.
    tables: HashMap<Locale, TranslationTable>,
    /// Locales used by `message` / `format` and as the fallback of `format_message`.
    defaults: MessageDefaults,
}

impl TranslationStore {
    /// Creates an empty store with defaults taken from the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with explicit lookup defaults.
    #[must_use]
    pub fn with_defaults(defaults: MessageDefaults) -> Self {
        Self { tables: HashMap::new(), defaults }
    }

    /// Builds a store from settings and loads its bundled locales through `resolver`.
    ///
    /// Returns the store and whether every bundled locale loaded. Use
    /// [`LocalizerSettings::directory_resolver`] for tables under `resourceDir`.
    #[must_use]
    pub fn from_settings(
        settings: &LocalizerSettings,
        resolver: &impl ResourceResolver,
    ) -> (Self, bool) {
        let mut store = Self::with_defaults(settings.message_defaults());
        let locales = settings.bundled();
        let all_valid = locales.len() == settings.bundled_locales.len();

        let loaded = store.load_bundled(resolver, &locales);

        (store, loaded && all_valid)
    }

    /// Current lookup defaults.
    #[must_use]
    pub const fn defaults(&self) -> &MessageDefaults {
        &self.defaults
    }

    /// Replaces the lookup defaults.
    pub fn set_defaults(&mut self, defaults: MessageDefaults) {
        self.defaults = defaults;
    }

    /// Stores `table` for `locale`, replacing any previous table.
    pub fn insert_table(&mut self, locale: Locale, table: TranslationTable) {
        tracing::debug!("Loaded {} messages for locale '{}'", table.len(), locale);
        self.tables.insert(locale, table);
    }

    /// Decodes a JSON object of string values from `source` and stores it for `locale`.
    ///
    /// On a decode error the store is left unchanged.
    pub fn load_from_source(
        &mut self,
        source: impl Read,
        locale: Locale,
    ) -> Result<(), LocalizerError> {
        let table = decode(source, &locale)?;
        self.insert_table(locale, table);
        Ok(())
    }

    /// [`load_from_source`](Self::load_from_source) over in-memory JSON text.
    pub fn load_from_str(&mut self, json: &str, locale: Locale) -> Result<(), LocalizerError> {
        self.load_from_source(json.as_bytes(), locale)
    }

    /// [`load_from_source`](Self::load_from_source) over a file.
    pub fn load_from_path(
        &mut self,
        path: impl AsRef<Path>,
        locale: Locale,
    ) -> Result<(), LocalizerError> {
        let table = read_file(path.as_ref(), &locale)?;
        self.insert_table(locale, table);
        Ok(())
    }

    /// Loads the bundled `<language>.json` resource for one locale.
    pub fn load_resource(
        &mut self,
        resolver: &impl ResourceResolver,
        locale: &Locale,
    ) -> Result<(), LocalizerError> {
        let table = read_resource(resolver, locale)?;
        self.insert_table(locale.clone(), table);
        Ok(())
    }

    /// Loads the bundled resource of every locale in `locales`.
    ///
    /// Every locale is attempted. Returns `true` only if all of them loaded;
    /// tables that did load stay in the store either way.
    pub fn load_bundled(&mut self, resolver: &impl ResourceResolver, locales: &[Locale]) -> bool {
        let mut all_loaded = true;
        for locale in locales {
            if let Err(e) = self.load_resource(resolver, locale) {
                tracing::warn!("Failed to load bundled translations for '{}': {}", locale, e);
                all_loaded = false;
            }
        }
        all_loaded
    }

    /// Resolves `id` for `locale`, consulting `fallback` only when `locale`
    /// has no table at all. Echoes `id` when neither has a table.
    #[must_use]
    pub fn get_message<'a>(&'a self, id: &'a str, locale: &Locale, fallback: &Locale) -> &'a str {
        if let Some(table) = self.tables.get(locale) {
            return table.get(id).unwrap_or_default();
        }

        if let Some(table) = self.tables.get(fallback) {
            tracing::trace!("No table for '{}', using fallback '{}'", locale, fallback);
            return table.get(id).unwrap_or_default();
        }

        tracing::trace!("No table for '{}' or '{}', echoing '{}'", locale, fallback, id);
        id
    }

    /// [`get_message`](Self::get_message) with the default locale and fallback.
    #[must_use]
    pub fn message<'a>(&'a self, id: &'a str) -> &'a str {
        self.get_message(id, &self.defaults.locale, &self.defaults.fallback)
    }

    /// Resolves `id` for `locale` (default fallback) and substitutes every
    /// `{name}` token with its parameter value.
    ///
    /// Parameters are applied one after another as global replacements;
    /// unmatched tokens are left verbatim.
    #[must_use]
    pub fn format_message<K, V>(
        &self,
        id: &str,
        params: impl IntoIterator<Item = (K, V)>,
        locale: &Locale,
    ) -> String
    where
        K: AsRef<str>,
        V: Display,
    {
        substitute(self.get_message(id, locale, &self.defaults.fallback), params)
    }

    /// [`format_message`](Self::format_message) with the default locale.
    #[must_use]
    pub fn format<K, V>(&self, id: &str, params: impl IntoIterator<Item = (K, V)>) -> String
    where
        K: AsRef<str>,
        V: Display,
    {
        self.format_message(id, params, &self.defaults.locale)
    }

    /// Whether a table is loaded for `locale` and holds `id`. Never consults a fallback.
    #[must_use]
    pub fn has_translation(&self, id: &str, locale: &Locale) -> bool {
        self.tables.get(locale).is_some_and(|table| table.contains(id))
    }

    /// Locales with a loaded table.
    #[must_use]
    pub fn available_locales(&self) -> HashSet<Locale> {
        self.tables.keys().cloned().collect()
    }

    /// The table loaded for `locale`, if any.
    #[must_use]
    pub fn table(&self, locale: &Locale) -> Option<&TranslationTable> {
        self.tables.get(locale)
    }
}

/// Decodes a table, tagging errors with the target locale.
pub(crate) fn decode(
    source: impl Read,
    locale: &Locale,
) -> Result<TranslationTable, LocalizerError> {
    TranslationTable::from_reader(source)
        .map_err(|source| LocalizerError::Decode { locale: locale.clone(), source })
}

/// Reads and decodes a translation file.
pub(crate) fn read_file(path: &Path, locale: &Locale) -> Result<TranslationTable, LocalizerError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| LocalizerError::Io { path: path.to_path_buf(), source })?;
    decode(content.as_bytes(), locale)
}

/// Resolves and decodes the bundled resource for `locale`.
pub(crate) fn read_resource(
    resolver: &impl ResourceResolver,
    locale: &Locale,
) -> Result<TranslationTable, LocalizerError> {
    let name = locale.bundled_resource_name();
    let reader = resolver
        .open(&name)
        .map_err(|source| LocalizerError::Io { path: name.clone().into(), source })?
        .ok_or_else(|| LocalizerError::ResourceNotFound(name.clone()))?;
    tracing::debug!("Reading bundled resource '{}' for locale '{}'", name, locale);
    decode(reader, locale)
}
