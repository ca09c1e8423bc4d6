//! Line-based `key=value` parsing for language files.
//!
//! The format is deliberately permissive: each line is split on its first
//! `=`, everything else (blank lines, `#` comments, stray text) is skipped
//! without complaint. Keys and values are kept verbatim, whitespace included.
//! A key repeated later in the file overwrites the earlier value.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::I18nError;

/// Parse `key=value` lines from a reader.
///
/// Bytes that are not valid UTF-8 (e.g. Latin-1 files) are decoded lossily,
/// so only a failing reader yields an error.
pub fn parse<R: BufRead>(mut reader: R) -> io::Result<HashMap<String, String>> {
    let mut props = HashMap::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = strip_line_ending(&buf);
        let line = String::from_utf8_lossy(line);
        if let Some((key, value)) = line.split_once('=') {
            props.insert(key.to_string(), value.to_string());
        }
    }
    Ok(props)
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Open and parse one language file.
///
/// The handle is dropped before returning, on success and on error alike.
pub fn load(path: &Path) -> Result<HashMap<String, String>, I18nError> {
    let file_load = |source| I18nError::FileLoad {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(file_load)?;
    parse(BufReader::new(file)).map_err(file_load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_pairs() {
        let props = parse("a=1\nb=2\n".as_bytes()).unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props["a"], "1");
        assert_eq!(props["b"], "2");
    }

    #[test]
    fn test_parse_splits_on_first_equals_only() {
        let props = parse("url=https://x.test/?a=b&c=d".as_bytes()).unwrap();
        assert_eq!(props["url"], "https://x.test/?a=b&c=d");
    }

    #[test]
    fn test_parse_skips_lines_without_equals() {
        let content = "# header\n\njust text\nkey=value\n";
        let props = parse(content.as_bytes()).unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props["key"], "value");
    }

    #[test]
    fn test_parse_keeps_whitespace_verbatim() {
        let props = parse(" key = value ".as_bytes()).unwrap();
        assert_eq!(props[" key "], " value ");
    }

    #[test]
    fn test_parse_empty_key_and_value() {
        let props = parse("=orphan\nempty=\n".as_bytes()).unwrap();
        assert_eq!(props[""], "orphan");
        assert_eq!(props["empty"], "");
    }

    #[test]
    fn test_parse_later_duplicate_wins() {
        let props = parse("k=first\nk=second".as_bytes()).unwrap();
        assert_eq!(props["k"], "second");
    }

    #[test]
    fn test_parse_strips_crlf() {
        let props = parse("a=1\r\nb=2\r\n".as_bytes()).unwrap();
        assert_eq!(props["a"], "1");
        assert_eq!(props["b"], "2");
    }

    #[test]
    fn test_parse_invalid_utf8_is_lossy() {
        let bytes: &[u8] = b"ok=1\ndrink=Caf\xe9\n";
        let props = parse(bytes).unwrap();
        assert_eq!(props["ok"], "1");
        assert_eq!(props["drink"], "Caf\u{FFFD}");
    }

    #[test]
    fn test_parse_last_line_without_newline() {
        let props = parse("a=1\nb=2".as_bytes()).unwrap();
        assert_eq!(props["b"], "2");
    }

    #[test]
    fn test_parse_reader_failure_is_error() {
        struct FailingReader;
        impl io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk gone"))
            }
        }
        let err = parse(BufReader::new(FailingReader)).unwrap_err();
        assert_eq!(err.to_string(), "disk gone");
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("messages_xx.properties");
        let err = load(&path).unwrap_err();
        match err {
            I18nError::FileLoad { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected FileLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_load_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("messages_en.properties");
        std::fs::write(&path, "greeting=Hello {{name}}!\n").unwrap();
        let props = load(&path).unwrap();
        assert_eq!(props["greeting"], "Hello {{name}}!");
    }
}
