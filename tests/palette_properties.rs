use std::collections::HashSet;
use std::thread;

use proptest::prelude::*;

use editor_palette::keys::StyleKey;
use editor_palette::language::Language;
use editor_palette::page::{PageBody, SettingsPage};
use editor_palette::palette::{compute_palette, RESERVED_IDENTIFIER_KEYS};
use editor_palette::registry::Catalog;

const KEY_NAMES: [&str; 8] = [
    "A",
    "B",
    "C",
    "D",
    "E",
    "F",
    "DEFAULT_LOCAL_VARIABLE",
    "DEFAULT_PARAMETER",
];

fn languages() -> Vec<Language> {
    let c = Language::new("c", "C");
    vec![
        Language::new("rust", "Rust"),
        Language::dialect("cpp", "C++", &c),
        c,
    ]
}

fn arb_key() -> impl Strategy<Value = StyleKey> {
    prop::sample::select(KEY_NAMES.to_vec()).prop_map(StyleKey::new)
}

fn with_keys(body: PageBody, keys: Vec<StyleKey>) -> PageBody {
    keys.into_iter()
        .fold(body, |body, key| body.with_descriptor("entry", key))
}

fn arb_body() -> impl Strategy<Value = PageBody> {
    (
        prop::sample::select(vec!["Rust", "C", "C++", "Other"]),
        prop::collection::vec(arb_key(), 0..6),
    )
        .prop_map(|(name, keys)| with_keys(PageBody::new(name), keys))
}

fn arb_page() -> impl Strategy<Value = SettingsPage> {
    prop_oneof![
        arb_body().prop_map(SettingsPage::plain),
        (arb_body(), 0..3usize, prop::collection::vec(arb_key(), 0..3)).prop_map(
            |(body, language, rainbow)| {
                SettingsPage::rainbow(body, languages()[language].clone(), rainbow)
            }
        ),
        (
            prop::collection::vec(arb_key(), 0..4),
            prop::collection::btree_map("[a-z]{1,4}", arb_key(), 0..3),
        )
            .prop_map(|(keys, tags)| {
                SettingsPage::general(with_keys(PageBody::new("General"), keys), Some(tags))
            }),
    ]
}

fn arb_pages() -> impl Strategy<Value = Vec<SettingsPage>> {
    prop::collection::vec(arb_page(), 0..6)
}

fn arb_query() -> impl Strategy<Value = Option<Language>> {
    prop_oneof![
        Just(None),
        Just(Some(Language::ANY)),
        (0..3usize).prop_map(|i| Some(languages()[i].clone())),
    ]
}

proptest! {
    #[test]
    fn prop_palette_is_idempotent(pages in arb_pages(), query in arb_query(), filter in any::<bool>()) {
        let languages = languages();
        let first = compute_palette(&languages, &pages, query.as_ref(), filter);
        let second = compute_palette(&languages, &pages, query.as_ref(), filter);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_filtered_is_subset_of_unfiltered(pages in arb_pages(), query in arb_query()) {
        let languages = languages();
        let filtered = compute_palette(&languages, &pages, query.as_ref(), true);
        let unfiltered = compute_palette(&languages, &pages, query.as_ref(), false);
        prop_assert!(filtered.is_subset(&unfiltered));
    }

    #[test]
    fn prop_adding_pages_only_adds_keys(pages in arb_pages(), extra in arb_page(), query in arb_query(), filter in any::<bool>()) {
        let languages = languages();
        let before = compute_palette(&languages, &pages, query.as_ref(), filter);
        let mut more = pages.clone();
        more.push(extra);
        let after = compute_palette(&languages, &more, query.as_ref(), filter);
        prop_assert!(before.is_subset(&after));
    }

    /// Reserved keys only get in through the general page's tag map.
    #[test]
    fn prop_filtered_palette_has_no_reserved_descriptor_keys(pages in arb_pages(), query in arb_query()) {
        let pages: Vec<_> = pages
            .into_iter()
            .map(|page| match page {
                SettingsPage::General { body, .. } => SettingsPage::general(body, None),
                other => other,
            })
            .collect();
        let palette = compute_palette(&languages(), &pages, query.as_ref(), true);
        for key in &RESERVED_IDENTIFIER_KEYS {
            prop_assert!(!palette.contains(key));
        }
    }

    #[test]
    fn prop_filtered_wildcard_only_takes_general_and_rainbow_keys(pages in arb_pages()) {
        let palette = compute_palette(&languages(), &pages, Some(&Language::ANY), true);

        let mut allowed = HashSet::new();
        for page in &pages {
            match page {
                SettingsPage::General { .. } => {
                    allowed.extend(page.descriptors().iter().map(|d| d.key.clone()));
                    allowed.extend(page.additional_tags().into_iter().flat_map(|t| t.values().cloned()));
                }
                SettingsPage::Rainbow { .. } => {
                    allowed.extend(
                        page.descriptors()
                            .iter()
                            .filter(|d| !page.is_rainbow_type(&d.key))
                            .map(|d| d.key.clone()),
                    );
                }
                SettingsPage::Plain(_) => {}
            }
        }

        for key in &palette {
            prop_assert!(allowed.contains(key), "unexpected key {}", key);
        }
    }

    #[test]
    fn prop_generic_palette_merges_general_tags(pages in arb_pages(), filter in any::<bool>()) {
        let palette = compute_palette(&languages(), &pages, None, filter);
        for page in pages.iter().filter(|page| page.is_general()) {
            for key in page.additional_tags().into_iter().flat_map(|tags| tags.values()) {
                prop_assert!(palette.contains(key));
            }
        }
    }

    #[test]
    fn prop_each_key_listed_once(pages in arb_pages(), query in arb_query(), filter in any::<bool>()) {
        let palette = compute_palette(&languages(), &pages, query.as_ref(), filter);
        let distinct: HashSet<_> = palette.iter().collect();
        prop_assert_eq!(distinct.len(), palette.len());
    }
}

#[test]
fn test_general_and_rainbow_end_to_end() {
    let l = Language::new("l", "L");
    let general = SettingsPage::general(
        PageBody::new("General")
            .with_descriptor("a", StyleKey::new("A"))
            .with_descriptor("b", StyleKey::new("B")),
        Some([("X".to_string(), StyleKey::new("C"))].into_iter().collect()),
    );
    let rainbow = SettingsPage::rainbow(
        PageBody::new("L colors")
            .with_descriptor("a", StyleKey::new("A"))
            .with_descriptor("d", StyleKey::new("D")),
        l.clone(),
        [StyleKey::new("D")],
    );
    let languages = vec![l.clone()];
    let pages = vec![general, rainbow];

    let filtered = compute_palette(&languages, &pages, Some(&l), true);
    assert_eq!(filtered.sorted(), vec![&StyleKey::new("A")]);

    let generic = compute_palette(&languages, &pages, None, false);
    let names: Vec<_> = generic.sorted().into_iter().map(StyleKey::name).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_concurrent_queries_agree() {
    let catalog = Catalog::builtin();
    let expected = catalog
        .palette(Some(Language::ANY))
        .text_attribute_keys(true);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    catalog
                        .palette(Some(Language::ANY))
                        .text_attribute_keys(true)
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
