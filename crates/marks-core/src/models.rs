//! Data models for marks
//!
//! Defines the bookmark value and the structural contract it is built from.
//!
//! A [`Bookmark`] is created once per raw record and never changes
//! afterwards. Its `url` and `link` are copied by value. Its `metadata` and
//! `tags` are copied shallowly: the bookmark holds another handle to the
//! record's storage (see [`crate::shared`]).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::{Metadata, Tags};

/// Anything that can act as a raw bookmark record
///
/// Every property is optional. A missing property is reported as `None`
/// and becomes an absent field on the bookmark.
pub trait BookmarkRecord {
    /// Canonical address
    fn url(&self) -> Option<String>;

    /// Secondary or display address
    fn link(&self) -> Option<String>;

    /// Handle to the descriptive attributes
    ///
    /// Returning a clone of an existing handle makes the bookmark share it.
    fn metadata(&self) -> Option<Metadata>;

    /// Handle to the ordered tag list
    ///
    /// Returning a clone of an existing handle makes the bookmark share it.
    fn tags(&self) -> Option<Tags>;
}

/// A saved reference to an address, with descriptive metadata and tags
///
/// Fields are read-only once the value is built. Absent fields are omitted
/// when serializing. Deserialization accepts any JSON value and applies the
/// lenient rules of the [`BookmarkRecord`] impl for [`Value`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Bookmark {
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Tags>,
}

impl Bookmark {
    /// Create a bookmark from its four fields
    pub fn new(
        url: Option<String>,
        link: Option<String>,
        metadata: Option<Metadata>,
        tags: Option<Tags>,
    ) -> Self {
        Self {
            url,
            link,
            metadata,
            tags,
        }
    }

    /// Build a bookmark by copying the four properties of `record`
    ///
    /// Never fails: missing properties become `None`.
    pub fn from_record<R: BookmarkRecord + ?Sized>(record: &R) -> Self {
        Self {
            url: record.url(),
            link: record.link(),
            metadata: record.metadata(),
            tags: record.tags(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }

    /// Copy of this bookmark whose metadata and tags no longer share storage
    pub fn deep_copy(&self) -> Self {
        Self {
            url: self.url.clone(),
            link: self.link.clone(),
            metadata: self.metadata.as_ref().map(Metadata::deep_clone),
            tags: self.tags.as_ref().map(Tags::deep_clone),
        }
    }
}

impl BookmarkRecord for Bookmark {
    fn url(&self) -> Option<String> {
        self.url.clone()
    }

    fn link(&self) -> Option<String> {
        self.link.clone()
    }

    fn metadata(&self) -> Option<Metadata> {
        self.metadata.clone()
    }

    fn tags(&self) -> Option<Tags> {
        self.tags.clone()
    }
}

impl From<Value> for Bookmark {
    fn from(value: Value) -> Self {
        Self::from_record(&value)
    }
}

/// A typed raw record, as handed over by a storage or API layer
///
/// Unlike [`Bookmark`] this is an ordinary mutable struct. Building a
/// bookmark from it shares the `metadata` and `tags` handles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBookmark {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub tags: Option<Tags>,
}

impl RawBookmark {
    /// Create a record with only a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

impl BookmarkRecord for RawBookmark {
    fn url(&self) -> Option<String> {
        self.url.clone()
    }

    fn link(&self) -> Option<String> {
        self.link.clone()
    }

    fn metadata(&self) -> Option<Metadata> {
        self.metadata.clone()
    }

    fn tags(&self) -> Option<Tags> {
        self.tags.clone()
    }
}
