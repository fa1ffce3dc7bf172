// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation engine: locale selection plus cached catalog lookups.
//!
//! The engine owns one mutable catalog cache. Every locale change empties
//! it and the next [`TranslationEngine::translate`] reloads lazily. All
//! mutating methods take `&mut self`; an engine shared between requests must
//! be wrapped by the caller (for example in a `Mutex`) so that a locale
//! switch and the lookups that follow it are not interleaved with another
//! request's. Giving each request its own engine works as well.

use super::catalog::{load_catalog, Catalog};
use super::discovery::list_available;
use super::iso639::LabelLookup;
use super::locale::{
    derive_system_locale, negotiate, primary_subtag, separator_variants, DEFAULT_LOCALE,
};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Catalog cache for the current locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogState {
    /// Nothing read since the last locale change.
    #[default]
    NotLoaded,
    Loaded(Catalog),
    /// The locale has no catalog file; lookups pass text through without
    /// touching the filesystem again.
    Missing,
}

impl CatalogState {
    fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Loaded(catalog) => Some(catalog),
            CatalogState::NotLoaded | CatalogState::Missing => None,
        }
    }
}

#[derive(Debug)]
pub struct TranslationEngine {
    directory: PathBuf,
    locale: String,
    system_signal: Option<String>,
    state: CatalogState,
}

impl TranslationEngine {
    /// Create an engine over the catalogs in `directory`.
    ///
    /// Without a `locale`, the system locale is used, which is
    /// [`DEFAULT_LOCALE`] unless a signal was supplied through
    /// [`TranslationEngine::with_system_locale`].
    pub fn new(directory: impl AsRef<Path>, locale: Option<&str>) -> Result<Self> {
        Self::with_system_locale(directory, locale, None)
    }

    /// Create an engine with an explicit process locale signal
    /// (`code[:rest]`, as found in `LANGUAGE`).
    ///
    /// Fails with [`Error::DirectoryNotFound`] unless `directory` is an
    /// existing directory; a regular file at that path is rejected too.
    pub fn with_system_locale(
        directory: impl AsRef<Path>,
        locale: Option<&str>,
        system_signal: Option<&str>,
    ) -> Result<Self> {
        let directory = directory.as_ref();
        if !directory.is_dir() {
            return Err(Error::DirectoryNotFound(directory.to_path_buf()));
        }

        let mut engine = Self {
            directory: directory.to_path_buf(),
            locale: String::new(),
            system_signal: system_signal.map(str::to_string),
            state: CatalogState::NotLoaded,
        };
        engine.set_locale(locale);
        Ok(engine)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Current locale code, in the spelling it was selected with.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn catalog_state(&self) -> &CatalogState {
        &self.state
    }

    /// Replace the process locale signal used when no explicit locale is
    /// given. Does not change the current locale.
    pub fn set_system_signal(&mut self, signal: Option<&str>) {
        self.system_signal = signal.map(str::to_string);
    }

    /// Locale derived from the system signal, [`DEFAULT_LOCALE`] when no
    /// signal was supplied.
    pub fn system_locale(&self) -> String {
        match &self.system_signal {
            Some(signal) => derive_system_locale(signal).to_string(),
            None => DEFAULT_LOCALE.to_string(),
        }
    }

    /// Switch locale. An empty or absent `locale` selects the system locale.
    ///
    /// When no catalog exists for an underscore-separated code such as
    /// `en_US`, the primary subtag (`en`) is used instead. Only that one
    /// fallback level is tried.
    pub fn set_locale(&mut self, locale: Option<&str>) {
        self.state = CatalogState::NotLoaded;

        self.locale = match locale.filter(|code| !code.is_empty()) {
            Some(code) => code.to_string(),
            None => self.system_locale(),
        };

        if !self.has_catalog(&self.locale) {
            if let Some(primary) = primary_subtag(&self.locale) {
                tracing::trace!(from = %self.locale, to = primary, "falling back to primary subtag");
                self.locale = primary.to_string();
            }
        }
    }

    /// Switch locale to the best match for an `Accept-Language`-shaped
    /// header. See [`negotiate`](crate::i18n::negotiate) for the matching rules.
    pub fn set_locale_from_request_header(&mut self, header: Option<&str>) {
        self.state = CatalogState::NotLoaded;
        self.locale = negotiate(header, |code| self.has_catalog(code));
    }

    /// Whether a catalog file exists for `locale`, accepting either `_` or
    /// `-` as the separator.
    pub fn has_catalog(&self, locale: &str) -> bool {
        self.catalog_path(locale).is_some()
    }

    /// Translate `text` into the current locale.
    ///
    /// The text is trimmed first. Untranslated text, text with an empty
    /// translation and text looked up against a missing catalog come back
    /// unchanged (but trimmed).
    pub fn translate(&mut self, text: &str) -> String {
        let text = text.trim();
        let catalog = self.catalog();

        if text.is_empty() {
            return String::new();
        }

        catalog
            .and_then(|catalog| catalog.lookup(text))
            .unwrap_or(text)
            .to_string()
    }

    /// Catalog for the current locale, read from disk on first use.
    /// `None` when the locale has no catalog file.
    pub fn catalog(&mut self) -> Option<&Catalog> {
        if matches!(self.state, CatalogState::NotLoaded) {
            self.state = self.load_current();
        }
        self.state.catalog()
    }

    /// Catalogs available next to the current one, as `label -> code`.
    pub fn available<L>(&self, labels: &L) -> Result<BTreeMap<String, String>>
    where
        L: LabelLookup + ?Sized,
    {
        list_available(&self.directory, labels)
    }

    fn load_current(&self) -> CatalogState {
        let catalog = self
            .catalog_path(&self.locale)
            .and_then(|path| load_catalog(&path));

        match catalog {
            Some(catalog) => CatalogState::Loaded(catalog),
            None => {
                tracing::debug!(locale = %self.locale, "no catalog, serving original strings");
                CatalogState::Missing
            }
        }
    }

    fn catalog_path(&self, locale: &str) -> Option<PathBuf> {
        if locale.is_empty() {
            return None;
        }
        separator_variants(locale)
            .into_iter()
            .map(|variant| self.directory.join(format!("{}.po", variant)))
            .find(|path| path.is_file())
    }
}
