//! List view-model: a selection cursor over the visible rows plus the row
//! renderer.
//!
//! The cursor indexes into the *visible* sequence (the filtered view), not
//! the full list. Callers resolve it to a full-list position through
//! `marks_core::query::visible_indices` before mutating the shelf, so a
//! delete always removes the entry under the cursor even while a filter or
//! search is active.

use marks_core::bookmark::Bookmark;
use marks_term::render::{RenderFrame, TextRole};

// ---------------------------------------------------------------------------
// ListState
// ---------------------------------------------------------------------------

/// Cursor over the visible rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    selected: usize,
}

impl ListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, visible_len: usize) {
        let max_idx = visible_len.saturating_sub(1);
        self.selected = (self.selected + 1).min(max_idx);
    }

    /// Keep the cursor inside the visible range after the view shrinks.
    pub fn clamp(&mut self, visible_len: usize) {
        self.selected = self.selected.min(visible_len.saturating_sub(1));
    }

    /// Back to the top; used whenever the filter or search term changes.
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Rows each entry occupies on screen: a title line and a url sub-line.
const ROWS_PER_ENTRY: usize = 2;

/// Draw the visible bookmarks into `frame`.
///
/// `indices` holds full-list positions of the visible rows in display
/// order; `selected` is the cursor position within `indices`. The viewport
/// scrolls so the selected entry stays on screen.
pub fn render_list_rows(
    frame: &mut RenderFrame,
    all: &[Bookmark],
    indices: &[usize],
    selected: usize,
    start_row: usize,
    max_rows: usize,
    width: usize,
) {
    if max_rows == 0 || indices.is_empty() {
        return;
    }

    let capacity = (max_rows / ROWS_PER_ENTRY).max(1);
    let viewport_start = selected
        .saturating_sub(capacity / 2)
        .min(indices.len().saturating_sub(capacity));

    let mut row = start_row;
    for (vis_idx, &entry_idx) in indices.iter().enumerate().skip(viewport_start) {
        if row + ROWS_PER_ENTRY > start_row + max_rows {
            break;
        }
        let Some(entry) = all.get(entry_idx) else {
            continue;
        };

        let cursor = if vis_idx == selected { "\u{25b8} " } else { "  " };
        let head = format!(
            "{cursor}{title}  [{category}]",
            title = entry.title,
            category = entry.category_label(),
        );
        let head_role = if vis_idx == selected {
            TextRole::Primary
        } else {
            TextRole::Muted
        };
        frame.draw_text(0, row, &truncate(&head, width), head_role);
        row += 1;

        let url_line = format!("    {}", entry.url);
        frame.draw_text(0, row, &truncate(&url_line, width), TextRole::Muted);
        row += 1;
    }
}

fn truncate(input: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= max_chars {
        return input.to_owned();
    }
    if max_chars == 1 {
        return "\u{2026}".to_owned();
    }
    let mut out: String = chars.into_iter().take(max_chars - 1).collect();
    out.push('\u{2026}');
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
