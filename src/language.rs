//! Language identity
//!
//! A [`Language`] is identified by its id. A language may be a dialect of
//! a base language, in which case it also "is" that base language.
//! [`Language::ANY`] is the wildcard query value meaning "all languages".

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A registered language (or the wildcard)
#[derive(Debug, Clone)]
pub struct Language {
    id: Cow<'static, str>,
    display_name: Cow<'static, str>,
    base: Option<Arc<Language>>,
}

impl Language {
    /// The wildcard language
    pub const ANY: Language = Language {
        id: Cow::Borrowed("any"),
        display_name: Cow::Borrowed(""),
        base: None,
    };

    /// Create a language with no base
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: Cow::Owned(id.into()),
            display_name: Cow::Owned(display_name.into()),
            base: None,
        }
    }

    /// Create a dialect of `base`
    pub fn dialect(
        id: impl Into<String>,
        display_name: impl Into<String>,
        base: &Language,
    ) -> Self {
        Self {
            base: Some(Arc::new(base.clone())),
            ..Self::new(id, display_name)
        }
    }

    /// Language id (unique within a registry)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The language this one is a dialect of
    pub fn base(&self) -> Option<&Language> {
        self.base.as_deref()
    }

    /// Whether this is the wildcard language
    pub fn is_any(&self) -> bool {
        *self == Self::ANY
    }

    /// Whether this language is `other` or a dialect of it
    ///
    /// Reflexive. The wildcard only "is" itself; matching everything is
    /// the caller's business.
    pub fn is(&self, other: &Language) -> bool {
        let mut current = Some(self);
        while let Some(language) = current {
            if language == other {
                return true;
            }
            current = language.base();
        }
        false
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Language {}

impl Hash for Language {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display_name.is_empty() {
            f.write_str(&self.id)
        } else {
            f.write_str(&self.display_name)
        }
    }
}
