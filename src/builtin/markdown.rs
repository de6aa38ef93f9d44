//! Markdown language and settings page

use crate::keys::{DefaultKey, StyleKey};
use crate::language::Language;
use crate::page::{PageBody, SettingsPage};

/// Create the Markdown language
pub fn markdown_language() -> Language {
    Language::new("markdown", "Markdown")
}

/// Create the Markdown page
pub fn markdown_page() -> SettingsPage {
    let body = PageBody::new("Markdown")
        .with_derived("Header", StyleKey::from_static("MARKDOWN_HEADER"), DefaultKey::Keyword)
        .with_derived("Bold", StyleKey::from_static("MARKDOWN_BOLD"), DefaultKey::Identifier)
        .with_derived("Italic", StyleKey::from_static("MARKDOWN_ITALIC"), DefaultKey::Identifier)
        .with_derived("Code span", StyleKey::from_static("MARKDOWN_CODE_SPAN"), DefaultKey::String)
        .with_derived("Link text", StyleKey::from_static("MARKDOWN_LINK_TEXT"), DefaultKey::FunctionCall)
        .with_derived("Link destination", StyleKey::from_static("MARKDOWN_LINK_DESTINATION"), DefaultKey::String)
        .with_derived("List marker", StyleKey::from_static("MARKDOWN_LIST_MARKER"), DefaultKey::Punctuation)
        .with_derived("Block quote", StyleKey::from_static("MARKDOWN_BLOCK_QUOTE"), DefaultKey::BlockComment);

    SettingsPage::plain(body)
}
