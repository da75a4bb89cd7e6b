//! Show command handler

use std::path::PathBuf;

use anyhow::Result;

use marks_core::Bookmark;

use crate::output::{Output, OutputFormat};

/// Print bookmarks decoded from a payload
pub fn run(file: Option<&PathBuf>, output: &Output) -> Result<()> {
    let bookmarks = super::load_input(file)?;
    match single_detail(output.format, &bookmarks) {
        Some(bookmark) => {
            output.print_bookmark_details(bookmark);
            Ok(())
        }
        None => output.print_bookmarks(&bookmarks),
    }
}

/// The bookmark to show in detail, if any
///
/// Only human output switches to the detail view for a lone bookmark; JSON
/// and quiet output keep the list shape whatever the count.
fn single_detail(format: OutputFormat, bookmarks: &[Bookmark]) -> Option<&Bookmark> {
    match (format, bookmarks) {
        (OutputFormat::Human, [single]) => Some(single),
        _ => None,
    }
}
