//! Construction behaviour of bookmark values, seen from outside the crate.

use marks_core::{Bookmark, Metadata, MetadataMap, RawBookmark, Tags};
use serde_json::json;

fn example_record() -> RawBookmark {
    let mut map = MetadataMap::new();
    map.insert("title".to_string(), json!("A"));

    RawBookmark {
        url: Some("https://a.com".to_string()),
        link: Some("https://a.com/short".to_string()),
        metadata: Some(Metadata::new(map)),
        tags: Some(Tags::from(vec!["news", "tech"])),
    }
}

#[test]
fn fields_equal_record_fields() {
    let record = example_record();
    let bookmark = Bookmark::from_record(&record);

    assert_eq!(bookmark.url(), record.url.as_deref());
    assert_eq!(bookmark.link(), record.link.as_deref());
    assert!(bookmark
        .metadata()
        .unwrap()
        .is_shared_with(record.metadata.as_ref().unwrap()));
    assert!(bookmark
        .tags()
        .unwrap()
        .is_shared_with(record.tags.as_ref().unwrap()));
}

#[test]
fn example_full_record() {
    let bookmark = Bookmark::from_record(&example_record());

    assert_eq!(bookmark.url(), Some("https://a.com"));
    assert_eq!(bookmark.link(), Some("https://a.com/short"));
    assert_eq!(bookmark.metadata().unwrap().title().as_deref(), Some("A"));
    assert_eq!(bookmark.tags().unwrap().get(), vec!["news", "tech"]);
}

#[test]
fn example_url_only_record() {
    let bookmark = Bookmark::from_record(&json!({"url": "https://b.com"}));

    assert_eq!(bookmark.url(), Some("https://b.com"));
    assert!(bookmark.link().is_none());
    assert!(bookmark.metadata().is_none());
    assert!(bookmark.tags().is_none());
}

#[test]
fn rebuilding_from_a_bookmark_is_stable() {
    let bookmark = Bookmark::from_record(&example_record());

    let once = Bookmark::from_record(&bookmark);
    let twice = Bookmark::from_record(&once);

    assert_eq!(once, bookmark);
    assert_eq!(twice, bookmark);
}

#[test]
fn tag_mutation_after_construction_is_visible() {
    let record = example_record();
    let bookmark = Bookmark::from_record(&record);

    record.tags.as_ref().unwrap().borrow_mut()[0] = "politics".to_string();

    assert_eq!(bookmark.tags().unwrap().get(), vec!["politics", "tech"]);
}

#[test]
fn metadata_mutation_after_construction_is_visible() {
    let record = example_record();
    let bookmark = Bookmark::from_record(&record);

    record
        .metadata
        .as_ref()
        .unwrap()
        .borrow_mut()
        .insert("title".to_string(), json!("B"));

    assert_eq!(bookmark.metadata().unwrap().title().as_deref(), Some("B"));
}

#[test]
fn url_reassignment_after_construction_is_not_visible() {
    let mut record = example_record();
    let bookmark = Bookmark::from_record(&record);

    record.url = Some("https://elsewhere.com".to_string());
    record.link = None;

    assert_eq!(bookmark.url(), Some("https://a.com"));
    assert_eq!(bookmark.link(), Some("https://a.com/short"));
}

#[test]
fn replacing_the_tags_handle_is_not_visible() {
    let mut record = example_record();
    let bookmark = Bookmark::from_record(&record);

    record.tags = Some(Tags::from(vec!["other"]));

    assert_eq!(bookmark.tags().unwrap().get(), vec!["news", "tech"]);
}

#[test]
fn deep_copy_stops_sharing() {
    let record = example_record();
    let copy = Bookmark::from_record(&record).deep_copy();

    record
        .tags
        .as_ref()
        .unwrap()
        .borrow_mut()
        .push("rust".to_string());

    assert_eq!(copy.tags().unwrap().get(), vec!["news", "tech"]);
}
