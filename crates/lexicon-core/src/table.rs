//! Per-language text tables and placeholder substitution.

use std::collections::HashMap;

/// Opening delimiter of a placeholder token.
pub const VAR_START_DELIMITER: &str = "{{";
/// Closing delimiter of a placeholder token.
pub const VAR_END_DELIMITER: &str = "}}";

/// Key/value texts loaded from one language file. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTable {
    lang: String,
    entries: HashMap<String, String>,
}

impl LanguageTable {
    /// Build a table for `lang` from parsed entries.
    pub fn new(lang: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            lang: lang.into(),
            entries,
        }
    }

    /// Language code this table was loaded for.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Text for `key`, or the empty string when the key is absent.
    pub fn text(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Text for `key` with every `{{name}}` token replaced by its value.
    ///
    /// Names that do not occur in the text are ignored, and tokens with no
    /// matching name are left as they are.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use lexicon_core::LanguageTable;
    ///
    /// let entries = HashMap::from([("greeting".to_string(), "Hello {{name}}!".to_string())]);
    /// let table = LanguageTable::new("en", entries);
    /// assert_eq!(table.text_with_params("greeting", [("name", "John")]), "Hello John!");
    /// ```
    pub fn text_with_params<I, K, V>(&self, key: &str, params: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut result = self.text(key).to_string();
        for (name, value) in params {
            let token = format!("{VAR_START_DELIMITER}{}{VAR_END_DELIMITER}", name.as_ref());
            result = result.replace(&token, value.as_ref());
        }
        result
    }

    /// Text for `key`, distinguishing an absent key from an empty value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
