//! Color settings pages
//!
//! A settings page groups the style keys a user can configure for one
//! language (or for the editor in general). Pages come in three shapes,
//! see [`SettingsPage`].

use std::collections::{BTreeMap, HashSet};

use crate::keys::{DefaultKey, StyleKey};
use crate::language::Language;

/// One configurable entry on a settings page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributesDescriptor {
    /// Name shown in the settings tree
    pub display_name: String,
    /// Key the entry configures
    pub key: StyleKey,
    /// Key inherited from when the scheme leaves `key` undefined
    pub fallback: Option<StyleKey>,
}

impl AttributesDescriptor {
    /// Create a descriptor
    pub fn new(display_name: impl Into<String>, key: StyleKey) -> Self {
        Self {
            display_name: display_name.into(),
            key,
            fallback: None,
        }
    }

    /// Builder: inherit from `fallback`
    pub fn with_fallback(mut self, fallback: StyleKey) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

/// Fields shared by every page shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBody {
    /// Page title, also used to guess the page's language
    pub display_name: String,
    /// Entries on the page, in display order
    pub descriptors: Vec<AttributesDescriptor>,
}

impl PageBody {
    /// Create an empty page body
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            descriptors: Vec::new(),
        }
    }

    /// Builder: add a descriptor
    pub fn with_descriptor(mut self, display_name: &str, key: StyleKey) -> Self {
        self.descriptors
            .push(AttributesDescriptor::new(display_name, key));
        self
    }

    /// Builder: add a descriptor inheriting from a language default
    pub fn with_derived(mut self, display_name: &str, key: StyleKey, fallback: DefaultKey) -> Self {
        self.descriptors
            .push(AttributesDescriptor::new(display_name, key).with_fallback(fallback.key()));
        self
    }
}

/// A settings page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsPage {
    /// A page with no extra capabilities
    Plain(PageBody),
    /// A language page aware of rainbow (per-identifier) highlighting
    Rainbow {
        body: PageBody,
        /// Language the page declares
        language: Language,
        /// Keys highlighted per identifier occurrence
        rainbow_keys: HashSet<StyleKey>,
    },
    /// The language-agnostic page
    General {
        body: PageBody,
        /// Highlighting tags whose keys are not listed as descriptors
        tags: Option<BTreeMap<String, StyleKey>>,
    },
}

impl SettingsPage {
    /// Create a plain page
    pub fn plain(body: PageBody) -> Self {
        SettingsPage::Plain(body)
    }

    /// Create a rainbow-aware page for `language`
    pub fn rainbow(
        body: PageBody,
        language: Language,
        rainbow_keys: impl IntoIterator<Item = StyleKey>,
    ) -> Self {
        SettingsPage::Rainbow {
            body,
            language,
            rainbow_keys: rainbow_keys.into_iter().collect(),
        }
    }

    /// Create the general page
    pub fn general(body: PageBody, tags: Option<BTreeMap<String, StyleKey>>) -> Self {
        SettingsPage::General { body, tags }
    }

    fn body(&self) -> &PageBody {
        match self {
            SettingsPage::Plain(body)
            | SettingsPage::Rainbow { body, .. }
            | SettingsPage::General { body, .. } => body,
        }
    }

    /// Page title
    pub fn display_name(&self) -> &str {
        &self.body().display_name
    }

    /// Entries on the page
    pub fn descriptors(&self) -> &[AttributesDescriptor] {
        &self.body().descriptors
    }

    /// Declared language of a rainbow page
    pub fn declared_language(&self) -> Option<&Language> {
        match self {
            SettingsPage::Rainbow { language, .. } => Some(language),
            SettingsPage::Plain(_) | SettingsPage::General { .. } => None,
        }
    }

    /// Whether `key` is one of this page's rainbow keys
    ///
    /// Always false for pages that are not rainbow-aware.
    pub fn is_rainbow_type(&self, key: &StyleKey) -> bool {
        match self {
            SettingsPage::Rainbow { rainbow_keys, .. } => rainbow_keys.contains(key),
            SettingsPage::Plain(_) | SettingsPage::General { .. } => false,
        }
    }

    /// Extra tag-to-key map of the general page
    pub fn additional_tags(&self) -> Option<&BTreeMap<String, StyleKey>> {
        match self {
            SettingsPage::General { tags, .. } => tags.as_ref(),
            SettingsPage::Plain(_) | SettingsPage::Rainbow { .. } => None,
        }
    }

    /// Whether this is the general page
    pub fn is_general(&self) -> bool {
        matches!(self, SettingsPage::General { .. })
    }

    /// Whether this page is rainbow-aware
    pub fn is_rainbow(&self) -> bool {
        matches!(self, SettingsPage::Rainbow { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> PageBody {
        PageBody::new("Rust")
            .with_descriptor("Keyword", StyleKey::from_static("RUST_KEYWORD"))
            .with_descriptor("Local", StyleKey::from_static("RUST_LOCAL"))
    }

    #[test]
    fn test_accessors_are_shared() {
        let page = SettingsPage::plain(body());
        assert_eq!(page.display_name(), "Rust");
        assert_eq!(page.descriptors().len(), 2);
        assert_eq!(page.descriptors()[0].key.name(), "RUST_KEYWORD");
    }

    #[test]
    fn test_rainbow_classification() {
        let rust = Language::new("rust", "Rust");
        let page = SettingsPage::rainbow(body(), rust.clone(), [StyleKey::from_static("RUST_LOCAL")]);
        assert!(page.is_rainbow());
        assert_eq!(page.declared_language(), Some(&rust));
        assert!(page.is_rainbow_type(&StyleKey::from_static("RUST_LOCAL")));
        assert!(!page.is_rainbow_type(&StyleKey::from_static("RUST_KEYWORD")));
    }

    #[test]
    fn test_plain_page_has_no_capabilities() {
        let page = SettingsPage::plain(body());
        assert_eq!(page.declared_language(), None);
        assert_eq!(page.additional_tags(), None);
        assert!(!page.is_rainbow_type(&StyleKey::from_static("RUST_LOCAL")));
        assert!(!page.is_general());
    }

    #[test]
    fn test_general_tags() {
        let tags = BTreeMap::from([("ERROR".to_string(), StyleKey::from_static("ERRORS"))]);
        let page = SettingsPage::general(PageBody::new("General"), Some(tags));
        assert!(page.is_general());
        assert_eq!(page.additional_tags().map(|t| t.len()), Some(1));
    }
}
