//! Duck-typed JSON records
//!
//! Lets any JSON object act as a [`BookmarkRecord`]. Conversion is lenient
//! and never fails; values of an unusable type are dropped with a debug log.
//!
//! - `url`, `link`: strings verbatim, numbers and booleans as their JSON
//!   text, anything else absent
//! - `metadata`: objects as-is, a bare string becomes `{"title": ..}`,
//!   `null` is absent, any other value becomes `{"value": ..}`
//! - `tags`: arrays keep their string, number and boolean elements; a
//!   string is split on [`TAG_JOIN_SEP`]; anything else is absent
//!
//! Owned JSON holds no shared handle, so a bookmark built from a JSON record
//! gets its own copy of `metadata` and `tags`. Later edits to the JSON value
//! are not seen by the bookmark. Use [`crate::RawBookmark`] when the record
//! and the bookmark must share storage.

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::BookmarkRecord;
use crate::shared::{Metadata, MetadataMap, Tags};
use crate::tags::{split_tags, TAG_JOIN_SEP};

impl BookmarkRecord for Map<String, Value> {
    fn url(&self) -> Option<String> {
        self.get("url").and_then(|v| scalar("url", v))
    }

    fn link(&self) -> Option<String> {
        self.get("link").and_then(|v| scalar("link", v))
    }

    fn metadata(&self) -> Option<Metadata> {
        self.get("metadata").and_then(metadata)
    }

    fn tags(&self) -> Option<Tags> {
        self.get("tags").and_then(tags)
    }
}

/// Non-object values have none of the four properties
impl BookmarkRecord for Value {
    fn url(&self) -> Option<String> {
        self.as_object().and_then(|map| map.url())
    }

    fn link(&self) -> Option<String> {
        self.as_object().and_then(|map| map.link())
    }

    fn metadata(&self) -> Option<Metadata> {
        self.as_object().and_then(|map| map.metadata())
    }

    fn tags(&self) -> Option<Tags> {
        self.as_object().and_then(|map| map.tags())
    }
}

fn scalar(property: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => {
            debug!(property, kind = kind(other), "dropping non-scalar bookmark field");
            None
        }
    }
}

fn metadata(value: &Value) -> Option<Metadata> {
    let map = match value {
        Value::Object(map) => map.clone(),
        Value::Null => return None,
        Value::String(title) => single("title", Value::String(title.clone())),
        other => single("value", other.clone()),
    };
    Some(Metadata::new(map))
}

fn single(key: &str, value: Value) -> MetadataMap {
    let mut map = MetadataMap::new();
    map.insert(key.to_string(), value);
    map
}

fn tags(value: &Value) -> Option<Tags> {
    match value {
        Value::Array(items) => Some(Tags::new(
            items.iter().filter_map(|item| scalar("tags", item)).collect(),
        )),
        Value::String(joined) => Some(Tags::new(split_tags(joined, TAG_JOIN_SEP))),
        Value::Null => None,
        other => {
            debug!(kind = kind(other), "dropping unusable tags value");
            None
        }
    }
}

/// JSON type name, for logs and errors
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
