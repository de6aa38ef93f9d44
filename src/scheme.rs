//! Color schemes
//!
//! A scheme assigns [`TextAttributes`] to style keys. Keys the scheme
//! does not define resolve through their fallback chain, ending at the
//! built-in defaults of [`DefaultKey`].

use std::collections::{HashMap, HashSet};

use crate::keys::{DefaultKey, StyleKey};
use crate::style::{Color, TextAttributes};

/// A named color scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    /// Scheme name
    pub name: String,
    /// Editor foreground
    pub default_foreground: Color,
    /// Editor background
    pub default_background: Color,
    attributes: HashMap<StyleKey, TextAttributes>,
    fallbacks: HashMap<StyleKey, StyleKey>,
}

impl ColorScheme {
    /// Create an empty scheme
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_foreground: Color::White,
            default_background: Color::Black,
            attributes: HashMap::new(),
            fallbacks: HashMap::new(),
        }
    }

    /// Set the attributes of a key
    pub fn set_attributes(&mut self, key: StyleKey, attributes: TextAttributes) {
        self.attributes.insert(key, attributes);
    }

    /// Builder: set the attributes of a key
    pub fn with_attributes(mut self, key: StyleKey, attributes: TextAttributes) -> Self {
        self.set_attributes(key, attributes);
        self
    }

    /// Declare that `key` inherits from `fallback` when undefined
    pub fn set_fallback(&mut self, key: StyleKey, fallback: StyleKey) {
        self.fallbacks.insert(key, fallback);
    }

    fn fallback_of(&self, key: &StyleKey) -> Option<StyleKey> {
        self.fallbacks
            .get(key)
            .cloned()
            .or_else(|| DefaultKey::from_key(key)?.fallback().map(DefaultKey::key))
    }

    /// Effective attributes of `key`
    ///
    /// The first key along the fallback chain that the scheme defines wins.
    /// When none does, the built-in default of the first language-default
    /// key on the chain applies. Returns `None` for keys with neither.
    pub fn attributes(&self, key: &StyleKey) -> Option<TextAttributes> {
        let mut seen = HashSet::new();
        let mut builtin = None;
        let mut current = Some(key.clone());

        while let Some(key) = current {
            if !seen.insert(key.clone()) {
                break;
            }
            if let Some(attrs) = self.attributes.get(&key) {
                return Some(*attrs);
            }
            if builtin.is_none() {
                builtin = DefaultKey::from_key(&key).map(DefaultKey::default_attributes);
            }
            current = self.fallback_of(&key);
        }

        builtin
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new("Default")
    }
}
