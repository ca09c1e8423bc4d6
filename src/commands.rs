//! CLI subcommands — each renders its output as a string for `main` to print.

use lexicon_core::{Catalog, LanguageTable};
use tracing::warn;


/// Parse a `name=value` placeholder argument.
pub fn parse_param(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected name=value, got '{arg}'")),
    }
}

/// Loaded language codes, one per line, the default one starred.
pub fn langs(catalog: &Catalog) -> String {
    catalog
        .languages()
        .into_iter()
        .map(|code| {
            if code == catalog.default_lang() {
                format!("{code} *")
            } else {
                code.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text for `key`, with placeholders substituted when `params` is non-empty.
pub fn get(
    catalog: &Catalog,
    lang: Option<&str>,
    key: &str,
    params: &[(String, String)],
) -> anyhow::Result<String> {
    let table = resolve(catalog, lang)?;
    if table.get(key).is_none() {
        warn!("key '{key}' not found in '{}'", table.lang());
    }
    Ok(table.text_with_params(key, params.iter().map(|(n, v)| (n, v))))
}

/// Every `key=value` entry of a language, sorted by key.
pub fn dump(catalog: &Catalog, lang: Option<&str>) -> anyhow::Result<String> {
    let table = resolve(catalog, lang)?;
    let mut keys: Vec<&str> = table.keys().collect();
    keys.sort_unstable();
    Ok(keys
        .into_iter()
        .map(|key| format!("{key}={}", table.text(key)))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Requested language, or the catalog default when none is given.
fn resolve<'a>(catalog: &'a Catalog, lang: Option<&str>) -> anyhow::Result<&'a LanguageTable> {
    let requested = lang.unwrap_or(catalog.default_lang());
    let table = catalog.language(requested)?;
    if table.lang() != requested {
        warn!("language '{requested}' not loaded, showing '{}'", table.lang());
    }
    Ok(table)
}
