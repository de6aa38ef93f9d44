//! Grouping palette keys by scheme color

use std::collections::HashMap;

use crate::keys::StyleKey;
use crate::scheme::ColorScheme;
use crate::style::{Color, TextAttributes};

/// Which color of a key's attributes to collect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSelector {
    Foreground,
    Background,
    Effect,
    ErrorStripe,
}

impl ColorSelector {
    /// Pick the selected color out of `attributes`
    pub fn select(self, attributes: &TextAttributes) -> Option<Color> {
        match self {
            ColorSelector::Foreground => attributes.foreground,
            ColorSelector::Background => attributes.background,
            ColorSelector::Effect => attributes.effect_color,
            ColorSelector::ErrorStripe => attributes.error_stripe,
        }
    }
}

/// Palette keys grouped by the color the scheme gives them
///
/// Colors are ordered by RGB value; keys within a color by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorGroups {
    groups: Vec<(Color, Vec<StyleKey>)>,
}

impl ColorGroups {
    /// Group `keys` by their selected color in `scheme`
    ///
    /// Keys without that color, and colors `accept` rejects, are skipped.
    pub fn collect<'k>(
        keys: impl IntoIterator<Item = &'k StyleKey>,
        scheme: &ColorScheme,
        selector: ColorSelector,
        accept: impl Fn(Color) -> bool,
    ) -> Self {
        let mut by_color: HashMap<Color, Vec<StyleKey>> = HashMap::new();
        for key in keys {
            let Some(color) = scheme
                .attributes(key)
                .and_then(|attributes| selector.select(&attributes))
            else {
                continue;
            };
            if accept(color) {
                by_color.entry(color).or_default().push(key.clone());
            }
        }

        let mut groups: Vec<_> = by_color.into_iter().collect();
        for (_, keys) in &mut groups {
            keys.sort();
        }
        groups.sort_by_cached_key(|(color, _)| (color.to_rgb(), color.to_string()));
        Self { groups }
    }

    /// Distinct colors, in order
    pub fn entries(&self) -> impl Iterator<Item = Color> + '_ {
        self.groups.iter().map(|(color, _)| *color)
    }

    /// Keys sharing `color`
    pub fn keys_for(&self, color: Color) -> &[StyleKey] {
        self.groups
            .iter()
            .find(|(c, _)| *c == color)
            .map(|(_, keys)| keys.as_slice())
            .unwrap_or(&[])
    }

    /// Colors with their keys, in order
    pub fn iter(&self) -> impl Iterator<Item = (Color, &[StyleKey])> + '_ {
        self.groups.iter().map(|(color, keys)| (*color, keys.as_slice()))
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no color was collected
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::DefaultKey;

    fn scheme() -> ColorScheme {
        ColorScheme::new("t")
            .with_attributes(StyleKey::new("A"), TextAttributes::fg(Color::Red))
            .with_attributes(StyleKey::new("B"), TextAttributes::fg(Color::Red).with_bg(Color::Blue))
            .with_attributes(StyleKey::new("C"), TextAttributes::fg(Color::Rgb(0, 0, 1)))
            .with_attributes(StyleKey::new("D"), TextAttributes::default())
    }

    fn keys() -> Vec<StyleKey> {
        ["B", "A", "C", "D", "MISSING"].into_iter().map(StyleKey::new).collect()
    }

    #[test]
    fn test_groups_share_colors() {
        let keys = keys();
        let groups = ColorGroups::collect(&keys, &scheme(), ColorSelector::Foreground, |_| true);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.keys_for(Color::Red), &[StyleKey::new("A"), StyleKey::new("B")]);
        assert_eq!(groups.keys_for(Color::Green), &[] as &[StyleKey]);
    }

    #[test]
    fn test_colors_ordered_by_rgb() {
        let keys = keys();
        let groups = ColorGroups::collect(&keys, &scheme(), ColorSelector::Foreground, |_| true);
        let colors: Vec<_> = groups.entries().collect();
        assert_eq!(colors, vec![Color::Rgb(0, 0, 1), Color::Red]);
    }

    #[test]
    fn test_selector_and_filter() {
        let keys = keys();
        let backgrounds = ColorGroups::collect(&keys, &scheme(), ColorSelector::Background, |_| true);
        assert_eq!(backgrounds.entries().collect::<Vec<_>>(), vec![Color::Blue]);

        let no_red = ColorGroups::collect(&keys, &scheme(), ColorSelector::Foreground, |c| c != Color::Red);
        assert_eq!(no_red.len(), 1);
    }

    #[test]
    fn test_builtin_defaults_contribute_colors() {
        let keys = vec![DefaultKey::Keyword.key()];
        let groups = ColorGroups::collect(&keys, &ColorScheme::default(), ColorSelector::Foreground, |_| true);
        assert_eq!(groups.keys_for(Color::Magenta), &[DefaultKey::Keyword.key()]);
    }
}
