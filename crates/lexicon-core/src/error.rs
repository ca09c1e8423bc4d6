use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for lexicon.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The resource directory could not be listed.
    #[error("failed to read directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `<base_name>_<lang>.properties` file exists in the directory.
    #[error("no language file found for '{base_name}' in {}", .path.display())]
    NoLanguageFiles { path: PathBuf, base_name: String },

    /// A discovered language file could not be opened or read.
    #[error("failed to load language file {}: {source}", .path.display())]
    FileLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog holds no languages (initialization never succeeded).
    #[error("no language file found during initialization")]
    Uninitialized,

    /// Neither the requested nor the default language is loaded.
    #[error("no default language file found for '{0}'")]
    DefaultLanguageNotFound(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}
