//! Per-key admission into a palette

use crate::keys::{DefaultKey, StyleKey};
use crate::language::Language;
use crate::page::SettingsPage;

/// Identifier keys that always conflict with rainbow highlighting
pub const RESERVED_IDENTIFIER_KEYS: [StyleKey; 2] = [
    DefaultKey::LocalVariable.key(),
    DefaultKey::Parameter.key(),
];

/// Whether `key` is one of [`RESERVED_IDENTIFIER_KEYS`]
pub fn is_reserved(key: &StyleKey) -> bool {
    RESERVED_IDENTIFIER_KEYS.iter().any(|reserved| reserved == key)
}

/// Whether `key` from `page` goes into the palette
///
/// Without filtering every key does. With filtering the reserved
/// identifier keys never do, and a language page only keeps the keys it
/// is rainbow-aware of and does not highlight per identifier.
pub fn admit(
    key: &StyleKey,
    page: &SettingsPage,
    page_language: Option<&Language>,
    filter: bool,
) -> bool {
    if !filter {
        return true;
    }
    if is_reserved(key) {
        return false;
    }
    match page {
        _ if page_language.is_none() => true,
        SettingsPage::Rainbow { .. } => !page.is_rainbow_type(key),
        SettingsPage::Plain(_) | SettingsPage::General { .. } => false,
    }
}
