//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use anyhow::Result;
use serde_json::Value;

use marks_core::{to_payload, Bookmark};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    pub format: OutputFormat,
    tag_separator: String,
}

impl Output {
    pub fn new(format: OutputFormat, tag_separator: impl Into<String>) -> Self {
        Self {
            format,
            tag_separator: tag_separator.into(),
        }
    }

    /// Print a list of bookmarks
    pub fn print_bookmarks(&self, bookmarks: &[Bookmark]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                if bookmarks.is_empty() {
                    println!("No bookmarks found.");
                    return Ok(());
                }
                for bookmark in bookmarks {
                    println!("{}", self.bookmark_line(bookmark));
                }
                println!("\n{} bookmark(s)", bookmarks.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&bookmarks_json(bookmarks))?);
            }
            OutputFormat::Quiet => {
                for url in bookmarks.iter().filter_map(Bookmark::url) {
                    println!("{}", url);
                }
            }
        }
        Ok(())
    }

    /// Print a single bookmark with all of its fields (human output)
    pub fn print_bookmark_details(&self, bookmark: &Bookmark) {
        for line in self.bookmark_details(bookmark) {
            println!("{}", line);
        }
    }

    /// Print tag usage counts
    pub fn print_tags(&self, tags: &[(String, usize)]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                if tags.is_empty() {
                    println!("No tags found.");
                    return Ok(());
                }
                for (name, count) in tags {
                    println!("{} ({})", name, count);
                }
                println!("\n{} tag(s)", tags.len());
            }
            OutputFormat::Json => {
                let json_tags: Vec<_> = tags
                    .iter()
                    .map(|(name, count)| serde_json::json!({"name": name, "count": count}))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json_tags)?);
            }
            OutputFormat::Quiet => {
                for (name, _) in tags {
                    println!("{}", name);
                }
            }
        }
        Ok(())
    }

    /// One-line summary: title | url | tags
    fn bookmark_line(&self, bookmark: &Bookmark) -> String {
        let title = bookmark
            .metadata()
            .and_then(|m| m.title())
            .unwrap_or_else(|| "-".to_string());
        let url = bookmark.url().or(bookmark.link()).unwrap_or("-");

        let mut parts = vec![truncate(&title, 35), truncate(url, 45)];
        if let Some(tags) = bookmark.tags().filter(|t| !t.is_empty()) {
            parts.push(tags.joined(&self.tag_separator));
        }
        parts.join(" | ")
    }

    /// Labelled lines for every present field
    ///
    /// Metadata attributes are indented under their own header so that keys
    /// such as `url` or `tags` cannot pass for the bookmark's own fields.
    fn bookmark_details(&self, bookmark: &Bookmark) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(url) = bookmark.url() {
            lines.push(format!("URL:      {}", url));
        }
        if let Some(link) = bookmark.link() {
            lines.push(format!("Link:     {}", link));
        }
        if let Some(tags) = bookmark.tags().filter(|t| !t.is_empty()) {
            lines.push(format!("Tags:     {}", tags.joined(&self.tag_separator)));
        }
        if let Some(metadata) = bookmark.metadata().filter(|m| !m.is_empty()) {
            lines.push("Metadata:".to_string());
            for (key, value) in metadata.borrow().iter() {
                lines.push(format!("  {}: {}", capitalize(key), display_value(value)));
            }
        }
        lines
    }
}

/// JSON form of a bookmark list, always wrapped in the list envelope
pub fn bookmarks_json(bookmarks: &[Bookmark]) -> Value {
    to_payload(bookmarks)
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strings unquoted, everything else as compact JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
