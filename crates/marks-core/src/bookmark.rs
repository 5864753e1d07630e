//! Bookmark record and add-form validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category label shown for bookmarks without one.
pub const UNCATEGORIZED_LABEL: &str = "uncategorized";

/// A stored bookmark.
///
/// Records carry no identifier and are never mutated in place; identity is
/// the position within the shelf's ordered sequence. The serialized form is
/// exactly these three string fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    pub category: String,
}

impl Bookmark {
    #[must_use]
    pub fn new(title: &str, url: &str, category: &str) -> Self {
        Self {
            title: title.to_owned(),
            url: url.to_owned(),
            category: category.to_owned(),
        }
    }

    /// Category text for display; an empty category reads "uncategorized".
    #[must_use]
    pub fn category_label(&self) -> &str {
        if self.category.trim().is_empty() {
            UNCATEGORIZED_LABEL
        } else {
            &self.category
        }
    }
}

/// Rejected add-form input. Surfaced to the user verbatim; never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddError {
    #[error("Title and URL are required.")]
    EmptyTitle,
    #[error("Title and URL are required.")]
    EmptyUrl,
    #[error("Please enter a valid URL starting with http:// or https://")]
    InvalidScheme,
}

/// `true` when `url` carries one of the accepted scheme prefixes.
#[must_use]
pub fn has_accepted_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Trim and validate form input, producing a bookmark ready to append.
///
/// Title and url must be non-empty after trimming and the url must pass the
/// scheme check; the category may be empty.
pub fn build_bookmark(title: &str, url: &str, category: &str) -> Result<Bookmark, AddError> {
    let title = title.trim();
    let url = url.trim();
    let category = category.trim();
    if title.is_empty() {
        return Err(AddError::EmptyTitle);
    }
    if url.is_empty() {
        return Err(AddError::EmptyUrl);
    }
    if !has_accepted_scheme(url) {
        return Err(AddError::InvalidScheme);
    }
    Ok(Bookmark::new(title, url, category))
}
