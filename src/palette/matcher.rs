//! Page relevance for a palette query

use crate::language::Language;
use crate::page::SettingsPage;

/// Whether `page` contributes to the palette for `query`
///
/// The generic query (`None`) takes the pages that belong to no language.
/// A language query takes the pages of that language, and the wildcard
/// query additionally takes every page that is [good for any
/// language](page_is_good_for_any).
pub fn is_relevant(
    page: &SettingsPage,
    page_language: Option<&Language>,
    query: Option<&Language>,
    filter: bool,
) -> bool {
    match (query, page_language) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(query), page_language) => {
            page_language.is_some_and(|language| query.is(language))
                || (query.is(&Language::ANY) && page_is_good_for_any(filter, page))
        }
    }
}

/// Whether a wildcard query may take this page
///
/// Without filtering every page qualifies. With filtering only the
/// general page and rainbow-aware pages do.
pub fn page_is_good_for_any(filter: bool, page: &SettingsPage) -> bool {
    match page {
        _ if !filter => true,
        SettingsPage::General { .. } | SettingsPage::Rainbow { .. } => true,
        SettingsPage::Plain(_) => false,
    }
}
