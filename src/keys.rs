//! Style keys
//!
//! A [`StyleKey`] names one highlightable style category. Keys are
//! compared by their external name, so two keys built from the same
//! name are the same key no matter where they were created.
//!
//! [`DefaultKey`] lists the language-default keys every language page
//! builds on, together with their fallbacks and default attributes.

use std::borrow::Cow;
use std::fmt;

use crate::style::{Color, EffectType, TextAttributes};

/// Opaque identity token for one highlightable style
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleKey(Cow<'static, str>);

impl StyleKey {
    /// Key with a static external name, usable in constants
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Key with an owned external name (config-defined keys)
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// External name of this key
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for StyleKey {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

/// Language-default highlighting keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultKey {
    /// Any identifier without a more specific style
    Identifier,
    /// Numeric literals
    Number,
    /// Language keywords
    Keyword,
    /// String literals
    String,
    /// Valid escape sequences inside strings
    ValidEscape,
    /// Line comments
    LineComment,
    /// Block comments
    BlockComment,
    /// Documentation comments
    DocComment,
    /// Operators
    Operation,
    /// Braces, brackets, parentheses
    Braces,
    /// Commas, dots, semicolons
    Punctuation,
    /// Labels
    Label,
    /// Constants and enum variants
    Constant,
    /// Local variables
    LocalVariable,
    /// Function and method parameters
    Parameter,
    /// Global variables
    GlobalVariable,
    /// Function declarations
    FunctionDeclaration,
    /// Function calls
    FunctionCall,
    /// Class, struct and type names
    ClassName,
    /// Attributes, annotations, decorators
    Metadata,
    /// Predefined symbols (builtins)
    PredefinedSymbol,
}

impl DefaultKey {
    /// All default keys, in declaration order
    pub const ALL: [DefaultKey; 21] = [
        DefaultKey::Identifier,
        DefaultKey::Number,
        DefaultKey::Keyword,
        DefaultKey::String,
        DefaultKey::ValidEscape,
        DefaultKey::LineComment,
        DefaultKey::BlockComment,
        DefaultKey::DocComment,
        DefaultKey::Operation,
        DefaultKey::Braces,
        DefaultKey::Punctuation,
        DefaultKey::Label,
        DefaultKey::Constant,
        DefaultKey::LocalVariable,
        DefaultKey::Parameter,
        DefaultKey::GlobalVariable,
        DefaultKey::FunctionDeclaration,
        DefaultKey::FunctionCall,
        DefaultKey::ClassName,
        DefaultKey::Metadata,
        DefaultKey::PredefinedSymbol,
    ];

    /// External name of the key
    pub const fn external_name(self) -> &'static str {
        match self {
            DefaultKey::Identifier => "DEFAULT_IDENTIFIER",
            DefaultKey::Number => "DEFAULT_NUMBER",
            DefaultKey::Keyword => "DEFAULT_KEYWORD",
            DefaultKey::String => "DEFAULT_STRING",
            DefaultKey::ValidEscape => "DEFAULT_VALID_STRING_ESCAPE",
            DefaultKey::LineComment => "DEFAULT_LINE_COMMENT",
            DefaultKey::BlockComment => "DEFAULT_BLOCK_COMMENT",
            DefaultKey::DocComment => "DEFAULT_DOC_COMMENT",
            DefaultKey::Operation => "DEFAULT_OPERATION_SIGN",
            DefaultKey::Braces => "DEFAULT_BRACES",
            DefaultKey::Punctuation => "DEFAULT_PUNCTUATION",
            DefaultKey::Label => "DEFAULT_LABEL",
            DefaultKey::Constant => "DEFAULT_CONSTANT",
            DefaultKey::LocalVariable => "DEFAULT_LOCAL_VARIABLE",
            DefaultKey::Parameter => "DEFAULT_PARAMETER",
            DefaultKey::GlobalVariable => "DEFAULT_GLOBAL_VARIABLE",
            DefaultKey::FunctionDeclaration => "DEFAULT_FUNCTION_DECLARATION",
            DefaultKey::FunctionCall => "DEFAULT_FUNCTION_CALL",
            DefaultKey::ClassName => "DEFAULT_CLASS_NAME",
            DefaultKey::Metadata => "DEFAULT_METADATA",
            DefaultKey::PredefinedSymbol => "DEFAULT_PREDEFINED_SYMBOL",
        }
    }

    /// The style key for this default
    pub const fn key(self) -> StyleKey {
        StyleKey::from_static(self.external_name())
    }

    /// Human-readable name, as shown on settings pages
    pub fn display_name(self) -> &'static str {
        match self {
            DefaultKey::Identifier => "Identifier",
            DefaultKey::Number => "Number",
            DefaultKey::Keyword => "Keyword",
            DefaultKey::String => "String",
            DefaultKey::ValidEscape => "Valid escape sequence",
            DefaultKey::LineComment => "Line comment",
            DefaultKey::BlockComment => "Block comment",
            DefaultKey::DocComment => "Doc comment",
            DefaultKey::Operation => "Operator sign",
            DefaultKey::Braces => "Braces",
            DefaultKey::Punctuation => "Punctuation",
            DefaultKey::Label => "Label",
            DefaultKey::Constant => "Constant",
            DefaultKey::LocalVariable => "Local variable",
            DefaultKey::Parameter => "Parameter",
            DefaultKey::GlobalVariable => "Global variable",
            DefaultKey::FunctionDeclaration => "Function declaration",
            DefaultKey::FunctionCall => "Function call",
            DefaultKey::ClassName => "Class name",
            DefaultKey::Metadata => "Metadata",
            DefaultKey::PredefinedSymbol => "Predefined symbol",
        }
    }

    /// Look up the default key with this external name
    pub fn from_key(key: &StyleKey) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|default| default.external_name() == key.name())
    }

    /// Key whose attributes are used when this one has none of its own
    pub fn fallback(self) -> Option<DefaultKey> {
        match self {
            DefaultKey::LocalVariable
            | DefaultKey::Parameter
            | DefaultKey::GlobalVariable
            | DefaultKey::FunctionDeclaration
            | DefaultKey::FunctionCall
            | DefaultKey::ClassName
            | DefaultKey::Constant
            | DefaultKey::Label
            | DefaultKey::PredefinedSymbol => Some(DefaultKey::Identifier),
            DefaultKey::DocComment => Some(DefaultKey::BlockComment),
            DefaultKey::ValidEscape => Some(DefaultKey::String),
            _ => None,
        }
    }

    /// Attributes used when no scheme defines this key or its fallbacks
    pub fn default_attributes(self) -> TextAttributes {
        match self {
            DefaultKey::Identifier => TextAttributes::default(),
            DefaultKey::Number => TextAttributes::fg(Color::Cyan),
            DefaultKey::Keyword => TextAttributes::fg(Color::Magenta).with_bold(),
            DefaultKey::String => TextAttributes::fg(Color::Green),
            DefaultKey::ValidEscape => TextAttributes::fg(Color::BrightYellow),
            DefaultKey::LineComment => TextAttributes::fg(Color::BrightBlack).with_italic(),
            DefaultKey::BlockComment => TextAttributes::fg(Color::BrightBlack).with_italic(),
            DefaultKey::DocComment => TextAttributes::fg(Color::Green).with_italic(),
            DefaultKey::Operation => TextAttributes::fg(Color::BrightWhite),
            DefaultKey::Braces | DefaultKey::Punctuation => TextAttributes::default(),
            DefaultKey::Label => TextAttributes::fg(Color::Yellow)
                .with_effect(EffectType::Underline, Color::Yellow),
            DefaultKey::Constant => TextAttributes::fg(Color::BrightRed),
            DefaultKey::LocalVariable | DefaultKey::Parameter => TextAttributes::default(),
            DefaultKey::GlobalVariable => TextAttributes::fg(Color::BrightMagenta).with_italic(),
            DefaultKey::FunctionDeclaration => TextAttributes::fg(Color::BrightBlue),
            DefaultKey::FunctionCall => TextAttributes::fg(Color::Blue),
            DefaultKey::ClassName => TextAttributes::fg(Color::Yellow),
            DefaultKey::Metadata => TextAttributes::fg(Color::BrightBlue),
            DefaultKey::PredefinedSymbol => TextAttributes::fg(Color::BrightCyan),
        }
    }
}
