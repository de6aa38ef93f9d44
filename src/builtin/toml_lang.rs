//! TOML language and settings page

use crate::keys::{DefaultKey, StyleKey};
use crate::language::Language;
use crate::page::{PageBody, SettingsPage};

/// Create the TOML language
pub fn toml_language() -> Language {
    Language::new("toml", "TOML")
}

/// Create the TOML page
pub fn toml_page() -> SettingsPage {
    let body = PageBody::new("TOML")
        .with_derived("Key", StyleKey::from_static("TOML_KEY"), DefaultKey::Keyword)
        .with_derived("String", StyleKey::from_static("TOML_STRING"), DefaultKey::String)
        .with_derived("Number", StyleKey::from_static("TOML_NUMBER"), DefaultKey::Number)
        .with_derived("Boolean", StyleKey::from_static("TOML_BOOLEAN"), DefaultKey::Constant)
        .with_derived("Date", StyleKey::from_static("TOML_DATE"), DefaultKey::Constant)
        .with_derived("Table header", StyleKey::from_static("TOML_TABLE"), DefaultKey::ClassName)
        .with_derived("Comment", StyleKey::from_static("TOML_COMMENT"), DefaultKey::LineComment);

    SettingsPage::plain(body)
}
