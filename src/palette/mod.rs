//! Color palette aggregation
//!
//! A palette is the set of style keys a color scheme exposes for a
//! language query. Every registered settings page is checked in turn:
//! its language is [resolved](resolve_language), its [relevance](is_relevant)
//! to the query decided, and the keys of relevant pages [admitted](admit)
//! one by one. The general page's highlighting tags are merged as well.
//!
//! Passing `filter = true` asks for the keys that conflict with rainbow
//! (per-identifier) highlighting to be left out.

mod colors;
mod filter;
mod matcher;
mod resolver;

use std::collections::hash_set;
use std::collections::HashSet;

use tracing::debug;

use crate::keys::StyleKey;
use crate::language::Language;
use crate::page::SettingsPage;
use crate::registry::{LanguageRegistry, PageRegistry};
use crate::scheme::ColorScheme;
use crate::style::Color;

pub use colors::{ColorGroups, ColorSelector};
pub use filter::{admit, is_reserved, RESERVED_IDENTIFIER_KEYS};
pub use matcher::{is_relevant, page_is_good_for_any};
pub use resolver::resolve_language;

/// Deduplicated set of style keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    keys: HashSet<StyleKey>,
}

impl Palette {
    /// Whether the palette holds `key`
    pub fn contains(&self, key: &StyleKey) -> bool {
        self.keys.contains(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the palette is empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys, in no particular order
    pub fn iter(&self) -> hash_set::Iter<'_, StyleKey> {
        self.keys.iter()
    }

    /// Keys sorted by name
    pub fn sorted(&self) -> Vec<&StyleKey> {
        let mut keys: Vec<_> = self.keys.iter().collect();
        keys.sort();
        keys
    }

    /// Whether every key of this palette is also in `other`
    pub fn is_subset(&self, other: &Palette) -> bool {
        self.keys.is_subset(&other.keys)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a StyleKey;
    type IntoIter = hash_set::Iter<'a, StyleKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl IntoIterator for Palette {
    type Item = StyleKey;
    type IntoIter = hash_set::IntoIter<StyleKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl FromIterator<StyleKey> for Palette {
    fn from_iter<I: IntoIterator<Item = StyleKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Compute the palette for `query` over a snapshot of the registries
///
/// `query` is `None` for the generic palette, [`Language::ANY`] for all
/// languages. Every page is visited once, in order.
pub fn compute_palette(
    languages: &[Language],
    pages: &[SettingsPage],
    query: Option<&Language>,
    filter: bool,
) -> Palette {
    let mut keys = HashSet::new();

    for page in pages {
        let page_language = resolve_language(page, languages);
        if !is_relevant(page, page_language, query, filter) {
            continue;
        }
        debug!(
            page = page.display_name(),
            language = ?page_language.map(Language::id),
            "page contributes to palette"
        );

        for descriptor in page.descriptors() {
            if admit(&descriptor.key, page, page_language, filter) {
                keys.insert(descriptor.key.clone());
            }
        }

        if let Some(tags) = page.additional_tags() {
            keys.extend(tags.values().cloned());
        }
    }

    debug!(
        query = ?query.map(Language::id),
        filter,
        keys = keys.len(),
        "palette computed"
    );
    Palette { keys }
}

/// Palette of one scheme for one language query
pub struct ColorPalette<'a> {
    scheme: &'a ColorScheme,
    languages: &'a LanguageRegistry,
    pages: &'a PageRegistry,
    language: Option<Language>,
    color_filter: Option<Box<dyn Fn(Color) -> bool + 'a>>,
}

impl<'a> ColorPalette<'a> {
    /// Create a palette over the given registries
    pub fn new(
        scheme: &'a ColorScheme,
        languages: &'a LanguageRegistry,
        pages: &'a PageRegistry,
        language: Option<Language>,
    ) -> Self {
        Self {
            scheme,
            languages,
            pages,
            language,
            color_filter: None,
        }
    }

    /// The scheme colors are read from
    pub fn scheme(&self) -> &ColorScheme {
        self.scheme
    }

    /// The language query, `None` for the generic palette
    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    /// Builder: only collect colors `accept` returns true for
    pub fn with_color_filter(mut self, accept: impl Fn(Color) -> bool + 'a) -> Self {
        self.color_filter = Some(Box::new(accept));
        self
    }

    /// Keys of this palette
    pub fn text_attribute_keys(&self, filter: bool) -> Palette {
        compute_palette(
            self.languages.languages(),
            self.pages.pages(),
            self.language.as_ref(),
            filter,
        )
    }

    /// Keys of this palette grouped by their selected color
    pub fn collect_colors(&self, selector: ColorSelector, filter: bool) -> ColorGroups {
        let keys = self.text_attribute_keys(filter);
        ColorGroups::collect(&keys, self.scheme, selector, |color| {
            self.color_filter.as_ref().map_or(true, |accept| accept(color))
        })
    }

    /// Foreground colors of all keys
    pub fn collect_foreground_colors(&self) -> ColorGroups {
        self.collect_colors(ColorSelector::Foreground, false)
    }

    /// Background colors of all keys
    pub fn collect_background_colors(&self) -> ColorGroups {
        self.collect_colors(ColorSelector::Background, false)
    }
}
