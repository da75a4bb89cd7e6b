//! Tag helpers
//!
//! Bookmark APIs commonly flatten a tag list into a single string joined
//! with [`TAG_JOIN_SEP`]. These helpers convert between the two forms, pick
//! `#hashtags` out of titles and summarize tag usage across a set of
//! bookmarks.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::Bookmark;

/// Separator used when tags are stored as one joined string
pub const TAG_JOIN_SEP: &str = ",";

/// Hashtag inside free text: `#word`, `#dotted.word`, not preceded by a word character
static TITLE_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\B#(?P<tag>\w+\.?\w+)").expect("title tag pattern is valid"));

/// Split a joined tag string
///
/// Each part is trimmed and empty parts are dropped, so an empty column
/// yields no tags rather than a single empty one. Order and duplicates are
/// preserved.
pub fn split_tags(joined: &str, sep: &str) -> Vec<String> {
    joined
        .split(sep)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Join tags with `sep`, in order
pub fn join_tags(tags: &[String], sep: &str) -> String {
    tags.join(sep)
}

/// Hashtags found in a title, in order of appearance, without the `#`
pub fn parse_title_tags(title: &str) -> Vec<String> {
    let tags: Vec<String> = TITLE_TAG_RE
        .captures_iter(title)
        .filter_map(|caps| caps.name("tag"))
        .map(|m| m.as_str().to_string())
        .collect();
    if !tags.is_empty() {
        debug!(?tags, "found tags in title");
    }
    tags
}

/// Explicit tags of a bookmark followed by title hashtags it does not already carry
pub fn tags_with_title_tags(bookmark: &Bookmark) -> Vec<String> {
    let mut tags = bookmark.tags().map(|t| t.get()).unwrap_or_default();
    let title = bookmark.metadata().and_then(|m| m.title()).unwrap_or_default();
    for tag in parse_title_tags(&title) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Like [`tag_counts`], also counting hashtags found in `metadata.title`
pub fn tag_counts_with_titles(bookmarks: &[Bookmark]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for tag in bookmarks.iter().flat_map(tags_with_title_tags) {
        *counts.entry(tag).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Count how many times each tag is used, sorted by tag name
///
/// A tag repeated on one bookmark counts once per occurrence.
pub fn tag_counts(bookmarks: &[Bookmark]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for tags in bookmarks.iter().filter_map(Bookmark::tags) {
        for tag in tags.borrow().iter() {
            *counts.entry(tag.clone()).or_default() += 1;
        }
    }
    counts.into_iter().collect()
}
