//! Command handlers

pub mod config;
pub mod show;
pub mod tags;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use marks_core::{load_bookmarks, read_bookmarks, Bookmark};

/// Read bookmarks from a payload file, or from stdin when no file (or `-`) is given
pub fn load_input(file: Option<&PathBuf>) -> Result<Vec<Bookmark>> {
    let bookmarks = match file {
        Some(path) if path.as_path() != Path::new("-") => load_bookmarks(path)
            .with_context(|| format!("Failed to load bookmarks from {:?}", path))?,
        _ => read_bookmarks(io::stdin().lock()).context("Failed to read bookmarks from stdin")?,
    };
    info!(count = bookmarks.len(), "loaded bookmarks");
    Ok(bookmarks)
}
