//! Tag command handlers

use std::path::PathBuf;

use anyhow::Result;

use marks_core::{tag_counts, tag_counts_with_titles};

use crate::output::Output;

/// List all tags with usage counts
///
/// Hashtags in bookmark titles count as tags unless `explicit_only` is set.
pub fn list(file: Option<&PathBuf>, explicit_only: bool, output: &Output) -> Result<()> {
    let bookmarks = super::load_input(file)?;
    let counts = if explicit_only {
        tag_counts(&bookmarks)
    } else {
        tag_counts_with_titles(&bookmarks)
    };
    output.print_tags(&counts)
}
