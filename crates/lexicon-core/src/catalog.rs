//! Language catalog: discovery, all-or-nothing loading and lookup.
//!
//! # Invariants
//!
//! 1. `Catalog::init` either returns a catalog holding a table for every
//!    discovered language file, or an error. No partially loaded catalog
//!    escapes.
//! 2. A catalog is read-only after construction, so it is `Send + Sync` and
//!    can be shared behind an `Arc` without locking.
//! 3. `language()` returns the requested table, else the default table, else
//!    an error. The fallback is silent.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

use crate::config::{shellexpand, CatalogConfig};
use crate::discover::{language_files, LanguageFile};
use crate::error::I18nError;
use crate::properties;
use crate::table::LanguageTable;

/// Serializes the table-building phase of concurrent `Catalog::init` calls.
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// All language tables of one resource base name.
///
/// `Catalog::default()` is an unusable, empty catalog: every `language()`
/// call on it fails with [`I18nError::Uninitialized`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    path: PathBuf,
    base_name: String,
    default_lang: String,
    languages: HashMap<String, LanguageTable>,
}

impl Catalog {
    /// Load every `<base_name>_<lang>.properties` file found in `dir`.
    ///
    /// Fails with [`I18nError::DirectoryRead`] if `dir` cannot be listed,
    /// [`I18nError::NoLanguageFiles`] if nothing matches, and
    /// [`I18nError::FileLoad`] if any matching file cannot be read.
    pub fn init(
        dir: impl Into<PathBuf>,
        base_name: impl Into<String>,
        default_lang: impl Into<String>,
    ) -> Result<Self, I18nError> {
        let path = dir.into();
        let base_name = base_name.into();
        let default_lang = default_lang.into();

        let files = language_files(&path, &base_name)?;
        if files.is_empty() {
            return Err(I18nError::NoLanguageFiles { path, base_name });
        }

        let languages = {
            let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            load_languages(&files)?
        };

        debug!(
            "loaded {} language(s) for '{base_name}' from {}",
            languages.len(),
            path.display()
        );
        Ok(Self {
            path,
            base_name,
            default_lang,
            languages,
        })
    }

    /// Load the catalog described by a `[catalog]` config section.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, I18nError> {
        Self::init(
            shellexpand(&config.dir),
            config.base_name.as_str(),
            config.default_lang.as_str(),
        )
    }

    /// Table for `lang`, falling back to the default language.
    pub fn language(&self, lang: &str) -> Result<&LanguageTable, I18nError> {
        if self.languages.is_empty() {
            return Err(I18nError::Uninitialized);
        }
        if let Some(table) = self.languages.get(lang) {
            return Ok(table);
        }
        debug!("language '{lang}' not loaded, using '{}'", self.default_lang);
        self.languages
            .get(&self.default_lang)
            .ok_or_else(|| I18nError::DefaultLanguageNotFound(self.default_lang.clone()))
    }

    /// Whether at least one language is loaded.
    pub fn is_initialized(&self) -> bool {
        !self.languages.is_empty()
    }

    /// Loaded language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Directory the language files were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name shared by the language files.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Fallback language code.
    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }
}

/// Parse every discovered file; the first failure discards all tables.
fn load_languages(files: &[LanguageFile]) -> Result<HashMap<String, LanguageTable>, I18nError> {
    let mut languages = HashMap::with_capacity(files.len());
    for file in files {
        let entries = properties::load(&file.path)?;
        debug!("{}: {} entries", file.lang, entries.len());
        languages.insert(file.lang.clone(), LanguageTable::new(&file.lang, entries));
    }
    Ok(languages)
}
