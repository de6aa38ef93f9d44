//! General and language-defaults pages

use std::collections::BTreeMap;

use crate::keys::{DefaultKey, StyleKey};
use crate::page::{PageBody, SettingsPage};

pub const TEXT: StyleKey = StyleKey::from_static("TEXT");
pub const ERRORS: StyleKey = StyleKey::from_static("ERRORS_ATTRIBUTES");
pub const WARNINGS: StyleKey = StyleKey::from_static("WARNING_ATTRIBUTES");
pub const INFO: StyleKey = StyleKey::from_static("INFO_ATTRIBUTES");
pub const DEPRECATED: StyleKey = StyleKey::from_static("DEPRECATED_ATTRIBUTES");
pub const UNUSED: StyleKey = StyleKey::from_static("NOT_USED_ELEMENT_ATTRIBUTES");
pub const SEARCH_RESULT: StyleKey = StyleKey::from_static("SEARCH_RESULT_ATTRIBUTES");
pub const TODO: StyleKey = StyleKey::from_static("TODO_DEFAULT_ATTRIBUTES");
pub const HYPERLINK: StyleKey = StyleKey::from_static("HYPERLINK_ATTRIBUTES");

/// The language-agnostic page
///
/// Inspection severities are not descriptors of their own; they reach
/// the palette through the highlighting tag map.
pub fn general_page() -> SettingsPage {
    let body = PageBody::new("General")
        .with_descriptor("Default text", TEXT)
        .with_descriptor("Errors and warnings//Error", ERRORS)
        .with_descriptor("Errors and warnings//Warning", WARNINGS)
        .with_descriptor("Search results//Search result", SEARCH_RESULT)
        .with_descriptor("Code//TODO", TODO)
        .with_descriptor("Hyperlinks//Followed", HYPERLINK);

    let tags = BTreeMap::from([
        ("error".to_string(), ERRORS),
        ("warning".to_string(), WARNINGS),
        ("weak_warning".to_string(), INFO),
        ("deprecated".to_string(), DEPRECATED),
        ("unused".to_string(), UNUSED),
    ]);

    SettingsPage::general(body, Some(tags))
}

/// Page listing every language-default key
///
/// Its title names no language, so it belongs to the generic query.
pub fn language_defaults_page() -> SettingsPage {
    let body = DefaultKey::ALL
        .into_iter()
        .fold(PageBody::new("Language Defaults"), |body, key| {
            body.with_descriptor(key.display_name(), key.key())
        });
    SettingsPage::plain(body)
}
