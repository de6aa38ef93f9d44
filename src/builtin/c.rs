//! C and C++ languages and settings page

use crate::keys::{DefaultKey, StyleKey};
use crate::language::Language;
use crate::page::{PageBody, SettingsPage};

const LOCAL_VARIABLE: StyleKey = StyleKey::from_static("C_LOCAL_VARIABLE");
const PARAMETER: StyleKey = StyleKey::from_static("C_PARAMETER");
const GLOBAL_VARIABLE: StyleKey = StyleKey::from_static("C_GLOBAL_VARIABLE");

/// Create the C language
pub fn c_language() -> Language {
    Language::new("c", "C")
}

/// Create the C++ language, a dialect of C
pub fn cpp_language() -> Language {
    Language::dialect("cpp", "C++", &c_language())
}

/// Create the shared C/C++ page
///
/// The title matches neither language; the page is found through its
/// declared language instead.
pub fn c_page() -> SettingsPage {
    let body = PageBody::new("C/C++")
        .with_derived("Keyword", StyleKey::from_static("C_KEYWORD"), DefaultKey::Keyword)
        .with_derived("String", StyleKey::from_static("C_STRING"), DefaultKey::String)
        .with_derived("Escape sequence", StyleKey::from_static("C_ESCAPE"), DefaultKey::ValidEscape)
        .with_derived("Number", StyleKey::from_static("C_NUMBER"), DefaultKey::Number)
        .with_derived("Comment", StyleKey::from_static("C_COMMENT"), DefaultKey::BlockComment)
        .with_derived("Preprocessor", StyleKey::from_static("C_PREPROCESSOR"), DefaultKey::Metadata)
        .with_derived("Macro", StyleKey::from_static("C_MACRO"), DefaultKey::Constant)
        .with_derived("Function", StyleKey::from_static("C_FUNCTION"), DefaultKey::FunctionDeclaration)
        .with_derived("Global variable", GLOBAL_VARIABLE, DefaultKey::GlobalVariable)
        .with_derived("Local variable", LOCAL_VARIABLE, DefaultKey::LocalVariable)
        .with_derived("Parameter", PARAMETER, DefaultKey::Parameter);

    SettingsPage::rainbow(body, c_language(), [LOCAL_VARIABLE, PARAMETER])
}
