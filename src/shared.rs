//! Thread-safe handle over a [`TranslationStore`].
//!
//! Tables are decoded before the write lock is taken and swapped in whole,
//! so readers only ever see complete tables.

use std::collections::HashSet;
use std::fmt::Display;
use std::io::Read;
use std::path::Path;
use std::sync::{
    Arc,
    PoisonError,
    RwLock,
    RwLockReadGuard,
    RwLockWriteGuard,
};

use crate::error::LocalizerError;
use crate::locale::Locale;
use crate::resource::ResourceResolver;
use crate::store::{
    self,
    TranslationStore,
};

/// Cloneable, shareable [`TranslationStore`].
#[derive(Debug, Clone, Default)]
pub struct SharedTranslationStore {
    /// The wrapped store.
    inner: Arc<RwLock<TranslationStore>>,
}

impl SharedTranslationStore {
    /// Wraps an existing store.
    #[must_use]
    pub fn new(store: TranslationStore) -> Self {
        Self { inner: Arc::new(RwLock::new(store)) }
    }

    /// Read access. A poisoned lock is recovered: every write is a single map insert.
    fn read_guard(&self) -> RwLockReadGuard<'_, TranslationStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access, recovering a poisoned lock like [`Self::read_guard`].
    fn write_guard(&self) -> RwLockWriteGuard<'_, TranslationStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` against the store under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&TranslationStore) -> R) -> R {
        f(&self.read_guard())
    }

    /// See [`TranslationStore::load_from_source`].
    pub fn load_from_source(
        &self,
        source: impl Read,
        locale: Locale,
    ) -> Result<(), LocalizerError> {
        let table = store::decode(source, &locale)?;
        self.write_guard().insert_table(locale, table);
        Ok(())
    }

    /// See [`TranslationStore::load_from_path`].
    pub fn load_from_path(
        &self,
        path: impl AsRef<Path>,
        locale: Locale,
    ) -> Result<(), LocalizerError> {
        let table = store::read_file(path.as_ref(), &locale)?;
        self.write_guard().insert_table(locale, table);
        Ok(())
    }

    /// See [`TranslationStore::load_bundled`].
    pub fn load_bundled(&self, resolver: &impl ResourceResolver, locales: &[Locale]) -> bool {
        let mut all_loaded = true;
        for locale in locales {
            match store::read_resource(resolver, locale) {
                Ok(table) => self.write_guard().insert_table(locale.clone(), table),
                Err(e) => {
                    tracing::warn!("Failed to load bundled translations for '{}': {}", locale, e);
                    all_loaded = false;
                }
            }
        }
        all_loaded
    }

    /// See [`TranslationStore::get_message`].
    #[must_use]
    pub fn get_message(&self, id: &str, locale: &Locale, fallback: &Locale) -> String {
        self.read_guard().get_message(id, locale, fallback).to_string()
    }

    /// See [`TranslationStore::format_message`].
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
        self.read_guard().format_message(id, params, locale)
    }

    /// See [`TranslationStore::has_translation`].
    #[must_use]
    pub fn has_translation(&self, id: &str, locale: &Locale) -> bool {
        self.read_guard().has_translation(id, locale)
    }

    /// See [`TranslationStore::available_locales`].
    #[must_use]
    pub fn available_locales(&self) -> HashSet<Locale> {
        self.read_guard().available_locales()
    }
}

impl From<TranslationStore> for SharedTranslationStore {
    fn from(store: TranslationStore) -> Self {
        Self::new(store)
    }
}
