//! Page language resolution

use crate::language::Language;
use crate::page::SettingsPage;

/// Guess which registered language a page belongs to
///
/// A rainbow page resolves to the first registered language that is its
/// declared language. Otherwise the first registered language whose
/// display name equals the page title wins. Pages matching neither
/// belong to no language.
pub fn resolve_language<'a>(page: &SettingsPage, languages: &'a [Language]) -> Option<&'a Language> {
    if let Some(declared) = page.declared_language() {
        if let Some(language) = languages.iter().find(|language| language.is(declared)) {
            return Some(language);
        }
    }

    languages
        .iter()
        .find(|language| language.display_name() == page.display_name())
}
