//! Bookmark API payloads
//!
//! Decodes the JSON a bookmark API serves into [`Bookmark`] values. Accepted
//! shapes:
//!
//! - `{"bookmarks": [...]}`, the list envelope (`null` means no bookmarks)
//! - `[...]`, a bare list of records
//! - `{...}` without a `bookmarks` key, a single record

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::{PayloadError, PayloadResult};
use crate::models::Bookmark;
use crate::record::kind;

/// Key of the list envelope
pub const ENVELOPE_KEY: &str = "bookmarks";

/// Decode bookmarks from a JSON string
pub fn parse_bookmarks(input: &str) -> PayloadResult<Vec<Bookmark>> {
    let value: Value = serde_json::from_str(input)?;
    bookmarks_from_value(&value)
}

/// Decode bookmarks from a reader
pub fn read_bookmarks<R: Read>(reader: R) -> PayloadResult<Vec<Bookmark>> {
    let value: Value = serde_json::from_reader(reader)?;
    bookmarks_from_value(&value)
}

/// Decode bookmarks from a file
pub fn load_bookmarks(path: &Path) -> PayloadResult<Vec<Bookmark>> {
    let file = File::open(path).map_err(|source| PayloadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_bookmarks(BufReader::new(file))
}

/// Decode bookmarks from an already parsed JSON value
pub fn bookmarks_from_value(value: &Value) -> PayloadResult<Vec<Bookmark>> {
    let bookmarks = match value {
        Value::Object(map) => match map.get(ENVELOPE_KEY) {
            Some(Value::Array(records)) => records_to_bookmarks(records),
            Some(Value::Null) => Vec::new(),
            Some(other) => {
                return Err(PayloadError::UnexpectedShape {
                    found: kind(other),
                })
            }
            None => vec![Bookmark::from_record(map)],
        },
        Value::Array(records) => records_to_bookmarks(records),
        other => {
            return Err(PayloadError::UnexpectedShape {
                found: kind(other),
            })
        }
    };
    debug!(count = bookmarks.len(), "decoded bookmark payload");
    Ok(bookmarks)
}

/// Wrap bookmarks in the list envelope
pub fn to_payload(bookmarks: &[Bookmark]) -> Value {
    json!({ ENVELOPE_KEY: bookmarks })
}

fn records_to_bookmarks(records: &[Value]) -> Vec<Bookmark> {
    records.iter().map(Bookmark::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ENVELOPE: &str = r#"{
        "bookmarks": [
            {"url": "https://a.com", "metadata": "A", "tags": ["news", "tech"], "desc": ""},
            {"url": "https://b.com", "metadata": "B", "tags": [""]}
        ]
    }"#;

    #[test]
    fn test_parse_envelope() {
        let bookmarks = parse_bookmarks(ENVELOPE).unwrap();
        assert_eq!(bookmarks.len(), 2);
        assert_eq!(bookmarks[0].url(), Some("https://a.com"));
        assert_eq!(
            bookmarks[0].metadata().unwrap().title(),
            Some("A".to_string())
        );
        assert_eq!(bookmarks[1].tags().unwrap().get(), vec![""]);
    }

    #[test]
    fn test_parse_null_envelope() {
        let bookmarks = parse_bookmarks(r#"{"bookmarks": null}"#).unwrap();
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn test_parse_bare_array() {
        let bookmarks = parse_bookmarks(r#"[{"url": "https://a.com"}, {}]"#).unwrap();
        assert_eq!(bookmarks.len(), 2);
        assert_eq!(bookmarks[1], Bookmark::default());
    }

    #[test]
    fn test_parse_single_record() {
        let bookmarks = parse_bookmarks(r#"{"url": "https://a.com"}"#).unwrap();
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].url(), Some("https://a.com"));
    }

    #[test]
    fn test_parse_unexpected_shape() {
        let err = parse_bookmarks("42").unwrap_err();
        assert!(matches!(
            err,
            PayloadError::UnexpectedShape { found: "number" }
        ));

        let err = parse_bookmarks(r#"{"bookmarks": "nope"}"#).unwrap_err();
        assert!(matches!(
            err,
            PayloadError::UnexpectedShape { found: "string" }
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_bookmarks("{not json").unwrap_err();
        assert!(matches!(err, PayloadError::Json(_)));
    }

    #[test]
    fn test_read_bookmarks() {
        let bookmarks = read_bookmarks(ENVELOPE.as_bytes()).unwrap();
        assert_eq!(bookmarks.len(), 2);
    }

    #[test]
    fn test_load_bookmarks_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(ENVELOPE.as_bytes()).unwrap();

        let bookmarks = load_bookmarks(file.path()).unwrap();
        assert_eq!(bookmarks.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_bookmarks(Path::new("/nonexistent/bookmarks.json")).unwrap_err();
        assert!(matches!(err, PayloadError::Read { .. }));
    }

    #[test]
    fn test_to_payload_round_trip() {
        let bookmarks = parse_bookmarks(ENVELOPE).unwrap();
        let payload = to_payload(&bookmarks);

        assert!(payload["bookmarks"].is_array());
        assert_eq!(payload["bookmarks"][0]["metadata"]["title"], "A");

        let again = bookmarks_from_value(&payload).unwrap();
        assert_eq!(again, bookmarks);
    }
}
