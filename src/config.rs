//! Configuration file support
//!
//! Loads catalog extensions from ~/.editor-palette.toml (or
//! %USERPROFILE%\.editor-palette.toml on Windows)
//!
//! Example:
//! ```toml
//! [scheme]
//! name = "Midnight"
//! background = "#101010"
//!
//! [scheme.attributes.DEFAULT_KEYWORD]
//! foreground = "magenta"
//! bold = true
//!
//! [[language]]
//! id = "kotlin"
//! display_name = "Kotlin"
//!
//! [[page]]
//! kind = "rainbow"
//! name = "Kotlin"
//! language = "kotlin"
//! rainbow = ["KOTLIN_LOCAL_VARIABLE"]
//! descriptors = [
//!     { name = "Keyword", key = "KOTLIN_KEYWORD", fallback = "DEFAULT_KEYWORD" },
//!     { name = "Local variable", key = "KOTLIN_LOCAL_VARIABLE" },
//! ]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{PaletteError, Result};
use crate::keys::StyleKey;
use crate::language::Language;
use crate::page::{AttributesDescriptor, PageBody, SettingsPage};
use crate::registry::Catalog;
use crate::style::{Color, EffectType, TextAttributes};

/// Parsed configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overrides for the active scheme
    #[serde(default)]
    pub scheme: Option<SchemeConfig>,
    /// Languages registered after the built-in ones
    #[serde(default, rename = "language")]
    pub languages: Vec<LanguageConfig>,
    /// Pages registered after the built-in ones
    #[serde(default, rename = "page")]
    pub pages: Vec<PageConfig>,
}

/// `[scheme]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemeConfig {
    pub name: Option<String>,
    pub foreground: Option<String>,
    pub background: Option<String>,
    /// Attributes per key name
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributesConfig>,
    /// Fallback key name per key name
    #[serde(default)]
    pub fallbacks: BTreeMap<String, String>,
}

/// `[scheme.attributes.KEY]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributesConfig {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub effect_color: Option<String>,
    pub effect: Option<EffectType>,
    pub error_stripe: Option<String>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

/// `[[language]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfig {
    pub id: String,
    pub display_name: String,
    /// Id of the language this one is a dialect of
    pub base: Option<String>,
}

/// One descriptor of a `[[page]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptorConfig {
    pub name: String,
    pub key: String,
    pub fallback: Option<String>,
}

/// `[[page]]` entry, discriminated by `kind`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum PageConfig {
    Plain {
        name: String,
        #[serde(default)]
        descriptors: Vec<DescriptorConfig>,
    },
    Rainbow {
        name: String,
        language: String,
        #[serde(default)]
        rainbow: Vec<String>,
        #[serde(default)]
        descriptors: Vec<DescriptorConfig>,
    },
    General {
        name: String,
        #[serde(default)]
        descriptors: Vec<DescriptorConfig>,
        tags: Option<BTreeMap<String, String>>,
    },
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".editor-palette.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".editor-palette.toml"))
        }
    }

    /// Load configuration from the default path
    ///
    /// Returns `None` when there is no config file.
    pub fn load() -> Result<Option<Self>> {
        let Some(path) = Self::config_path() else {
            return Ok(None);
        };
        match Self::load_from(&path) {
            Ok(config) => Ok(Some(config)),
            Err(PaletteError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Load configuration from `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents).map_err(|source| PaletteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Register this config's languages and pages and apply its scheme
    ///
    /// Scheme settings go last so explicit fallbacks win over the ones
    /// page descriptors declare.
    pub(crate) fn apply_to(self, catalog: &mut Catalog) -> Result<()> {
        for language in self.languages {
            let language = match &language.base {
                Some(base) => {
                    let base = catalog
                        .languages
                        .find(base)
                        .ok_or_else(|| PaletteError::UnknownLanguage(base.clone()))?;
                    Language::dialect(language.id, language.display_name, base)
                }
                None => Language::new(language.id, language.display_name),
            };
            catalog.languages.register(language)?;
        }

        for page in self.pages {
            let page = page.into_page(catalog)?;
            catalog.pages.register(page);
        }
        catalog.register_fallbacks();

        if let Some(scheme) = self.scheme {
            scheme.apply_to(catalog)?;
        }

        Ok(())
    }
}

impl PageConfig {
    fn into_page(self, catalog: &Catalog) -> Result<SettingsPage> {
        match self {
            PageConfig::Plain { name, descriptors } => {
                Ok(SettingsPage::plain(page_body(name, descriptors)?))
            }
            PageConfig::Rainbow {
                name,
                language,
                rainbow,
                descriptors,
            } => {
                let language = catalog
                    .languages
                    .find(&language)
                    .cloned()
                    .ok_or(PaletteError::UnknownLanguage(language))?;
                let body = page_body(name, descriptors)?;
                for key in &rainbow {
                    if !body.descriptors.iter().any(|d| d.key.name() == key) {
                        warn!(page = %body.display_name, key = %key, "rainbow key is not on its page");
                    }
                }
                Ok(SettingsPage::rainbow(
                    body,
                    language,
                    rainbow.into_iter().map(StyleKey::new),
                ))
            }
            PageConfig::General {
                name,
                descriptors,
                tags,
            } => {
                let tags = tags.map(|tags| {
                    tags.into_iter()
                        .map(|(tag, key)| (tag, StyleKey::new(key)))
                        .collect()
                });
                Ok(SettingsPage::general(page_body(name, descriptors)?, tags))
            }
        }
    }
}

fn page_body(name: String, descriptors: Vec<DescriptorConfig>) -> Result<PageBody> {
    if name.trim().is_empty() {
        return Err(PaletteError::InvalidPage {
            page: name,
            reason: "page name is empty".to_string(),
        });
    }

    let mut body = PageBody::new(name);
    for descriptor in descriptors {
        let mut entry = AttributesDescriptor::new(descriptor.name, StyleKey::new(descriptor.key));
        if let Some(fallback) = descriptor.fallback {
            entry = entry.with_fallback(StyleKey::new(fallback));
        }
        body.descriptors.push(entry);
    }
    Ok(body)
}

impl SchemeConfig {
    fn apply_to(self, catalog: &mut Catalog) -> Result<()> {
        let scheme = &mut catalog.scheme;
        if let Some(name) = self.name {
            scheme.name = name;
        }
        if let Some(color) = self.foreground {
            scheme.default_foreground = color.parse()?;
        }
        if let Some(color) = self.background {
            scheme.default_background = color.parse()?;
        }
        for (key, attributes) in self.attributes {
            scheme.set_attributes(StyleKey::new(key), attributes.into_attributes()?);
        }
        for (key, fallback) in self.fallbacks {
            scheme.set_fallback(StyleKey::new(key), StyleKey::new(fallback));
        }
        Ok(())
    }
}

impl AttributesConfig {
    fn into_attributes(self) -> Result<TextAttributes> {
        let parse = |color: Option<String>| color.map(|c| c.parse::<Color>()).transpose();
        Ok(TextAttributes {
            foreground: parse(self.foreground)?,
            background: parse(self.background)?,
            effect_color: parse(self.effect_color)?,
            effect: self.effect.unwrap_or_default(),
            error_stripe: parse(self.error_stripe)?,
            bold: self.bold,
            italic: self.italic,
        })
    }
}
