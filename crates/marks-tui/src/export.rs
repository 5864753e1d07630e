//! Markdown export of the bookmark list.
//!
//! Always exports the full unfiltered list, regardless of the active view.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use marks_core::bookmark::Bookmark;

/// File name of the export, written beside the data blob.
pub const EXPORT_FILE_NAME: &str = "bookmarks-export.md";

/// Where the export lands for a given blob path.
#[must_use]
pub fn default_export_path(blob_path: &Path) -> PathBuf {
    match blob_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(EXPORT_FILE_NAME),
        _ => PathBuf::from(EXPORT_FILE_NAME),
    }
}

/// Render all bookmarks as a Markdown document.
#[must_use]
pub fn render_markdown(entries: &[Bookmark], exported_at: &str) -> String {
    let mut out = String::with_capacity(entries.len() * 96 + 64);
    out.push_str("# Bookmarks - exported ");
    out.push_str(exported_at);
    out.push_str("\n\n");
    if entries.is_empty() {
        out.push_str("(no bookmarks)\n");
        return out;
    }
    for entry in entries {
        out.push_str("## ");
        out.push_str(&entry.title);
        out.push('\n');
        out.push('<');
        out.push_str(&entry.url);
        out.push_str(">\n");
        out.push_str("Category: ");
        out.push_str(entry.category_label());
        out.push_str("\n\n");
    }
    out
}

/// Render and write the export file.
pub fn write_export(
    path: &Path,
    entries: &[Bookmark],
    exported_at: &str,
) -> Result<(), io::Error> {
    let document = render_markdown(entries, exported_at);
    fs::write(path, document.as_bytes())?;
    log::debug!("exported {} bookmark(s) to {}", entries.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    fn sample() -> Vec<Bookmark> {
        vec![
            Bookmark::new("Rust", "https://rust-lang.org", "dev"),
            Bookmark::new("Unfiled", "http://example.com", ""),
        ]
    }

    #[test]
    fn markdown_lists_every_bookmark() {
        let md = render_markdown(&sample(), "2026-08-05 12:00 UTC");
        assert!(md.starts_with("# Bookmarks - exported 2026-08-05 12:00 UTC"));
        assert!(md.contains("## Rust\n<https://rust-lang.org>\nCategory: dev"));
        assert!(md.contains("## Unfiled\n<http://example.com>\nCategory: uncategorized"));
    }

    #[test]
    fn markdown_for_empty_list() {
        let md = render_markdown(&[], "now");
        assert!(md.contains("(no bookmarks)"));
    }

    #[test]
    fn export_path_sits_beside_the_blob() {
        let path = default_export_path(Path::new("/data/marks/bookmarks.json"));
        assert_eq!(path, PathBuf::from("/data/marks/bookmarks-export.md"));

        let bare = default_export_path(Path::new("bookmarks.json"));
        assert_eq!(bare, PathBuf::from(EXPORT_FILE_NAME));
    }

    #[test]
    fn write_export_creates_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(EXPORT_FILE_NAME);
        write_export(&path, &sample(), "now").expect("write export");
        let written = fs::read_to_string(&path).expect("read export");
        assert!(written.contains("## Rust"));
    }
}
