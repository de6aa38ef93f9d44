//! Built-in languages, settings pages and scheme
//!
//! This module provides the catalog an editor ships with before any
//! configuration is applied.

mod general;
mod rust;
mod c;
mod python;
mod toml_lang;
mod markdown;

use crate::language::Language;
use crate::page::SettingsPage;
use crate::scheme::ColorScheme;
use crate::style::{Color, EffectType, TextAttributes};

pub use general::{
    DEPRECATED, ERRORS, HYPERLINK, INFO, SEARCH_RESULT, TEXT, TODO, UNUSED, WARNINGS,
};

/// Get all built-in languages, in registration order
pub fn all_languages() -> Vec<Language> {
    vec![
        rust::rust_language(),
        c::c_language(),
        c::cpp_language(),
        python::python_language(),
        toml_lang::toml_language(),
        markdown::markdown_language(),
    ]
}

/// Get all built-in settings pages, in registration order
pub fn all_pages() -> Vec<SettingsPage> {
    vec![
        general::general_page(),
        general::language_defaults_page(),
        rust::rust_page(),
        c::c_page(),
        python::python_page(),
        toml_lang::toml_page(),
        markdown::markdown_page(),
    ]
}

/// The scheme used when no config overrides it
pub fn default_scheme() -> ColorScheme {
    ColorScheme::new("Default")
        .with_attributes(TEXT, TextAttributes::fg(Color::White).with_bg(Color::Black))
        .with_attributes(
            ERRORS,
            TextAttributes::default()
                .with_effect(EffectType::WaveUnderline, Color::BrightRed)
                .with_error_stripe(Color::Red),
        )
        .with_attributes(
            WARNINGS,
            TextAttributes::default()
                .with_effect(EffectType::WaveUnderline, Color::Yellow)
                .with_error_stripe(Color::Yellow),
        )
        .with_attributes(
            INFO,
            TextAttributes::default().with_effect(EffectType::WaveUnderline, Color::BrightBlack),
        )
        .with_attributes(
            DEPRECATED,
            TextAttributes::default().with_effect(EffectType::StrikeOut, Color::BrightBlack),
        )
        .with_attributes(UNUSED, TextAttributes::fg(Color::BrightBlack))
        .with_attributes(SEARCH_RESULT, TextAttributes::bg(Color::Blue))
        .with_attributes(TODO, TextAttributes::fg(Color::BrightBlue).with_italic())
        .with_attributes(
            HYPERLINK,
            TextAttributes::fg(Color::BrightBlue).with_effect(EffectType::Underline, Color::BrightBlue),
        )
}
