//! editor-palette - color scheme palettes over editor color settings pages
//!
//! An editor exposes its configurable highlighting styles through color
//! settings pages, one per language plus a general page. This crate
//! computes, for a color scheme and a language query, the set of style
//! keys those pages contribute, optionally leaving out the keys that
//! conflict with rainbow (per-identifier) highlighting.
//!
//! ```
//! use editor_palette::registry::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let rust = catalog.parse_language_query("rust").unwrap();
//! let keys = catalog.palette(rust).text_attribute_keys(true);
//! assert!(!keys.is_empty());
//! ```

pub mod builtin;
pub mod config;
pub mod error;
pub mod keys;
pub mod language;
pub mod page;
pub mod palette;
pub mod registry;
pub mod render;
pub mod scheme;
pub mod style;
