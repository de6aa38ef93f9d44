//! Rust language and settings page

use crate::keys::{DefaultKey, StyleKey};
use crate::language::Language;
use crate::page::{PageBody, SettingsPage};

const LOCAL_VARIABLE: StyleKey = StyleKey::from_static("RUST_LOCAL_VARIABLE");
const PARAMETER: StyleKey = StyleKey::from_static("RUST_PARAMETER");

/// Create the Rust language
pub fn rust_language() -> Language {
    Language::new("rust", "Rust")
}

/// Create the Rust page
///
/// Locals and parameters are highlighted per identifier when rainbow
/// highlighting is on.
pub fn rust_page() -> SettingsPage {
    let body = PageBody::new("Rust")
        .with_derived("Keyword", StyleKey::from_static("RUST_KEYWORD"), DefaultKey::Keyword)
        .with_derived("String", StyleKey::from_static("RUST_STRING"), DefaultKey::String)
        .with_derived("Number", StyleKey::from_static("RUST_NUMBER"), DefaultKey::Number)
        .with_derived("Comments//Line comment", StyleKey::from_static("RUST_LINE_COMMENT"), DefaultKey::LineComment)
        .with_derived("Comments//Block comment", StyleKey::from_static("RUST_BLOCK_COMMENT"), DefaultKey::BlockComment)
        .with_derived("Comments//Doc comment", StyleKey::from_static("RUST_DOC_COMMENT"), DefaultKey::DocComment)
        .with_derived("Lifetime", StyleKey::from_static("RUST_LIFETIME"), DefaultKey::Label)
        .with_derived("Macro", StyleKey::from_static("RUST_MACRO"), DefaultKey::FunctionCall)
        .with_derived("Attribute", StyleKey::from_static("RUST_ATTRIBUTE"), DefaultKey::Metadata)
        .with_derived("Function declaration", StyleKey::from_static("RUST_FUNCTION"), DefaultKey::FunctionDeclaration)
        .with_derived("Struct", StyleKey::from_static("RUST_STRUCT"), DefaultKey::ClassName)
        .with_derived("Local variable", LOCAL_VARIABLE, DefaultKey::LocalVariable)
        .with_derived("Parameter", PARAMETER, DefaultKey::Parameter);

    SettingsPage::rainbow(body, rust_language(), [LOCAL_VARIABLE, PARAMETER])
}
