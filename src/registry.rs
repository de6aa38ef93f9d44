//! Language and settings page registries
//!
//! This module provides the registries palette queries read from, and the
//! [`Catalog`] that bundles them with the active color scheme.

use std::path::Path;

use tracing::debug;

use crate::builtin;
use crate::config::Config;
use crate::error::{PaletteError, Result};
use crate::language::Language;
use crate::page::SettingsPage;
use crate::palette::ColorPalette;
use crate::scheme::ColorScheme;

/// Registered languages, in registration order
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in languages
    pub fn with_builtins() -> Self {
        Self {
            languages: builtin::all_languages(),
        }
    }

    /// Register a language
    ///
    /// Ids are unique; the wildcard id is reserved.
    pub fn register(&mut self, language: Language) -> Result<()> {
        if language.is_any() || self.find(language.id()).is_some() {
            return Err(PaletteError::DuplicateLanguage(language.id().to_string()));
        }
        self.languages.push(language);
        Ok(())
    }

    /// Get a registered language by id
    pub fn find(&self, id: &str) -> Option<&Language> {
        self.languages.iter().find(|language| language.id() == id)
    }

    /// Registered languages, in registration order
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// List language ids, sorted
    pub fn list_languages(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.languages.iter().map(Language::id).collect();
        ids.sort();
        ids
    }

    /// Number of registered languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether no language is registered
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Registered settings pages, in registration order
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    pages: Vec<SettingsPage>,
}

impl PageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in pages
    pub fn with_builtins() -> Self {
        Self {
            pages: builtin::all_pages(),
        }
    }

    /// Register a page after all existing ones
    pub fn register(&mut self, page: SettingsPage) {
        self.pages.push(page);
    }

    /// Registered pages, in registration order
    pub fn pages(&self) -> &[SettingsPage] {
        &self.pages
    }

    /// Get a page by display name
    pub fn find(&self, display_name: &str) -> Option<&SettingsPage> {
        self.pages
            .iter()
            .find(|page| page.display_name() == display_name)
    }

    /// Number of registered pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no page is registered
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Languages, pages and the active scheme
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub languages: LanguageRegistry,
    pub pages: PageRegistry,
    pub scheme: ColorScheme,
}

impl Catalog {
    /// Catalog with every built-in language, page and the default scheme
    pub fn builtin() -> Self {
        let mut catalog = Self {
            languages: LanguageRegistry::with_builtins(),
            pages: PageRegistry::with_builtins(),
            scheme: builtin::default_scheme(),
        };
        catalog.register_fallbacks();
        catalog
    }

    /// Built-in catalog extended by the config file
    ///
    /// Uses the default config location when `path` is `None`; a missing
    /// default config is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut catalog = Self::builtin();
        let config = match path {
            Some(path) => Some(Config::load_from(path)?),
            None => Config::load()?,
        };
        if let Some(config) = config {
            catalog.apply(config)?;
        }
        Ok(catalog)
    }

    /// Add the languages, pages and scheme settings of a config
    ///
    /// On error the catalog is left as it was.
    pub fn apply(&mut self, config: Config) -> Result<()> {
        let mut next = self.clone();
        config.apply_to(&mut next)?;
        *self = next;
        debug!(
            languages = self.languages.len(),
            pages = self.pages.len(),
            scheme = %self.scheme.name,
            "catalog configured"
        );
        Ok(())
    }

    /// Teach the scheme the fallbacks declared by page descriptors
    pub(crate) fn register_fallbacks(&mut self) {
        for page in self.pages.pages() {
            for descriptor in page.descriptors() {
                if let Some(fallback) = &descriptor.fallback {
                    self.scheme
                        .set_fallback(descriptor.key.clone(), fallback.clone());
                }
            }
        }
    }

    /// Parse a language query
    ///
    /// `"none"` is the generic query, `"any"` the wildcard, anything else
    /// must be a registered language id.
    pub fn parse_language_query(&self, query: &str) -> Result<Option<Language>> {
        match query {
            "none" => Ok(None),
            "any" => Ok(Some(Language::ANY)),
            id => self
                .languages
                .find(id)
                .cloned()
                .map(Some)
                .ok_or_else(|| PaletteError::UnknownLanguage(id.to_string())),
        }
    }

    /// Palette of this catalog's scheme for `language`
    pub fn palette(&self, language: Option<Language>) -> ColorPalette<'_> {
        ColorPalette::new(&self.scheme, &self.languages, &self.pages, language)
    }
}
