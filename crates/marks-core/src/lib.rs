//! marks core library
//!
//! Turns raw bookmark-like records into stable, typed bookmark values.
//!
//! A [`Bookmark`] has exactly four fields: `url`, `link`, `metadata` and
//! `tags`. It is built from anything implementing [`BookmarkRecord`] and
//! construction never fails; a missing property simply becomes an absent
//! field.
//!
//! # Quick Start
//!
//! ```
//! use marks_core::{parse_bookmarks, Bookmark, RawBookmark};
//!
//! let bookmark = Bookmark::from_record(&RawBookmark::new("https://b.com"));
//! assert_eq!(bookmark.url(), Some("https://b.com"));
//! assert!(bookmark.tags().is_none());
//!
//! let bookmarks = parse_bookmarks(r#"{"bookmarks": [{"url": "https://a.com"}]}"#)?;
//! assert_eq!(bookmarks.len(), 1);
//! # Ok::<(), marks_core::PayloadError>(())
//! ```
//!
//! # Modules
//!
//! - `models`: the bookmark value and its input contract
//! - `shared`: shared handles behind `metadata` and `tags`
//! - `record`: JSON values as bookmark records
//! - `tags`: tag splitting, joining, title hashtags and counting
//! - `payload`: decoding bookmark API payloads
//! - `error`: payload errors

pub mod error;
pub mod models;
pub mod payload;
pub mod record;
pub mod shared;
pub mod tags;

pub use error::{PayloadError, PayloadResult};
pub use models::{Bookmark, BookmarkRecord, RawBookmark};
pub use payload::{bookmarks_from_value, load_bookmarks, parse_bookmarks, read_bookmarks, to_payload};
pub use shared::{Metadata, MetadataMap, Shared, Tags};
pub use tags::{
    join_tags, parse_title_tags, split_tags, tag_counts, tag_counts_with_titles,
    tags_with_title_tags, TAG_JOIN_SEP,
};
