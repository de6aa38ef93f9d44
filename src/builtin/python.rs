//! Python language and settings page

use crate::keys::{DefaultKey, StyleKey};
use crate::language::Language;
use crate::page::{PageBody, SettingsPage};

/// Create the Python language
pub fn python_language() -> Language {
    Language::new("python", "Python")
}

/// Create the Python page
///
/// Not rainbow-aware: filtered palettes skip its keys.
pub fn python_page() -> SettingsPage {
    let body = PageBody::new("Python")
        .with_derived("Keyword", StyleKey::from_static("PY_KEYWORD"), DefaultKey::Keyword)
        .with_derived("String", StyleKey::from_static("PY_STRING"), DefaultKey::String)
        .with_derived("Number", StyleKey::from_static("PY_NUMBER"), DefaultKey::Number)
        .with_derived("Line comment", StyleKey::from_static("PY_LINE_COMMENT"), DefaultKey::LineComment)
        .with_derived("Docstring", StyleKey::from_static("PY_DOC_COMMENT"), DefaultKey::DocComment)
        .with_derived("Decorator", StyleKey::from_static("PY_DECORATOR"), DefaultKey::Metadata)
        .with_derived("Builtin name", StyleKey::from_static("PY_BUILTIN_NAME"), DefaultKey::PredefinedSymbol)
        .with_derived("Function definition", StyleKey::from_static("PY_FUNC_DEFINITION"), DefaultKey::FunctionDeclaration)
        .with_derived("Class definition", StyleKey::from_static("PY_CLASS_DEFINITION"), DefaultKey::ClassName)
        .with_derived("Parameter", StyleKey::from_static("PY_PARAMETER"), DefaultKey::Parameter)
        .with_derived("'self' parameter", StyleKey::from_static("PY_SELF_PARAMETER"), DefaultKey::Parameter);

    SettingsPage::plain(body)
}
