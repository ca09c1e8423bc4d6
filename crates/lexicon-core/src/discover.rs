//! Language file discovery.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::error::I18nError;

/// Extension every language file carries.
pub const RESOURCE_EXTENSION: &str = ".properties";

/// A `<base>_<lang>.properties` file found in the resource directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFile {
    /// Language code taken from the file name (e.g. "en", "pt_BR").
    pub lang: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// Extract the language code from a file name, if it belongs to `base_name`.
///
/// `messages_fr.properties` yields `fr` for base `messages`. Names without the
/// extension, without the `_` separator, with another base, or with an empty
/// code yield `None`.
///
/// The name must start with `<base_name>_`. For base names without `_` this is
/// the same as comparing the text before the first underscore; it extends that
/// rule so base names such as `app_messages` match as well.
pub fn lang_code<'a>(file_name: &'a str, base_name: &str) -> Option<&'a str> {
    let stem = file_name.strip_suffix(RESOURCE_EXTENSION)?;
    let lang = stem.strip_prefix(base_name)?.strip_prefix('_')?;
    if lang.is_empty() {
        return None;
    }
    Some(lang)
}

/// List `dir` (non-recursive) and return every language file of `base_name`,
/// sorted by language code.
///
/// Subdirectories and names that are not valid UTF-8 are skipped.
pub fn language_files(dir: &Path, base_name: &str) -> Result<Vec<LanguageFile>, I18nError> {
    let dir_read = |source| I18nError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };
    let entries = std::fs::read_dir(dir).map_err(dir_read)?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(dir_read)?;
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        match lang_code(name, base_name) {
            Some(lang) => {
                debug!("discovered language file {name} ({lang})");
                files.push(LanguageFile {
                    lang: lang.to_string(),
                    path: entry.path(),
                });
            }
            None => trace!("skipping {name}: not a '{base_name}' language file"),
        }
    }

    files.sort_by(|a, b| a.lang.cmp(&b.lang));
    Ok(files)
}
