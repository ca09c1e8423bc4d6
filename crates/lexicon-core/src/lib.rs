//! # lexicon-core
//!
//! Loads `<base>_<lang>.properties` files from a directory into per-language
//! tables, resolves a requested language with fallback to a default one, and
//! substitutes `{{name}}` placeholders in looked-up text.

pub mod catalog;
pub mod config;
pub mod discover;
pub mod error;
pub mod properties;
pub mod table;

// Re-export public API — consumers use `lexicon_core::*` paths.
pub use catalog::Catalog;
pub use discover::RESOURCE_EXTENSION;
pub use error::I18nError;
pub use table::{LanguageTable, VAR_END_DELIMITER, VAR_START_DELIMITER};
