//! Error types for editor-palette

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Palette error types
///
/// Palette aggregation itself never fails; these cover loading and
/// validating the catalog and scheme that feed it.
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Duplicate language id: {0}")]
    DuplicateLanguage(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Page '{page}': {reason}")]
    InvalidPage { page: String, reason: String },
}
