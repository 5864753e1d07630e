#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Full-frame snapshots of the bookmark screen: empty state, populated
//! list, live search, add form, and the blocking validation modal. Frames
//! are rendered at a fixed 64x8 size so the snapshots stay stable.

use marks_core::bookmark::Bookmark;
use marks_core::storage::{BlobStore, BLOB_FILE_NAME};
use marks_term::input::{InputEvent, Key, KeyEvent, ResizeEvent};
use marks_term::snapshot::assert_frame_snapshot;
use marks_tui::app::App;
use tempfile::TempDir;

const WIDTH: usize = 64;
const HEIGHT: usize = 8;

fn key(k: Key) -> InputEvent {
    InputEvent::Key(KeyEvent::plain(k))
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.update(key(Key::Char(ch)));
    }
}

fn app_with(entries: &[Bookmark]) -> (TempDir, App) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = BlobStore::new(dir.path().join(BLOB_FILE_NAME));
    if !entries.is_empty() {
        store.save(entries).expect("seed blob");
    }
    let mut app = App::new(store);
    app.update(InputEvent::Resize(ResizeEvent {
        width: WIDTH,
        height: HEIGHT,
    }));
    (dir, app)
}

fn two_entries() -> Vec<Bookmark> {
    vec![
        Bookmark::new("T1", "http://a", "work"),
        Bookmark::new("T2", "https://b", "home"),
    ]
}

/// Rows padded to the frame width and joined, matching `RenderFrame::snapshot`.
fn expected_frame(rows: &[&str]) -> String {
    rows.iter()
        .map(|row| format!("{row:<width$}", width = WIDTH))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn empty_state_frame() {
    let (_dir, app) = app_with(&[]);
    assert_frame_snapshot(
        "empty_state",
        &app.render(),
        &expected_frame(&[
            " marks  0/0 shown  category:all  search:-",
            "a:add  d:delete  /:search  c:category  x:export  ?:help  q:quit",
            "No bookmarks saved yet - press a to add one",
            "",
            "",
            "",
            "",
            "",
        ]),
    );
}

#[test]
fn populated_list_frame() {
    let (_dir, app) = app_with(&two_entries());
    assert_frame_snapshot(
        "populated_list",
        &app.render(),
        &expected_frame(&[
            " marks  2/2 shown  category:all  search:-",
            "a:add  d:delete  /:search  c:category  x:export  ?:help  q:quit",
            "\u{25b8} T1  [work]",
            "    http://a",
            "  T2  [home]",
            "    https://b",
            "",
            "",
        ]),
    );
}

#[test]
fn live_search_frame() {
    let (_dir, mut app) = app_with(&two_entries());
    app.update(key(Key::Char('/')));
    type_str(&mut app, "b");
    assert_frame_snapshot(
        "live_search",
        &app.render(),
        &expected_frame(&[
            " marks  1/2 shown  category:all  search:b",
            "type to filter  Enter:keep  Esc:clear",
            "search> b_",
            "\u{25b8} T2  [home]",
            "    https://b",
            "",
            "",
            "",
        ]),
    );
}

#[test]
fn add_form_frame() {
    let (_dir, mut app) = app_with(&[]);
    app.update(key(Key::Char('a')));
    type_str(&mut app, "R");
    assert_frame_snapshot(
        "add_form",
        &app.render(),
        &expected_frame(&[
            " marks  0/0 shown  category:all  search:-",
            "Enter:save  Tab:next field  Esc:cancel",
            "Add bookmark",
            "\u{25b8} Title:    R_",
            "  URL:",
            "  Category:",
            "",
            "",
        ]),
    );
}

#[test]
fn validation_modal_frame() {
    let (_dir, mut app) = app_with(&[]);
    app.update(key(Key::Char('a')));
    type_str(&mut app, "only a title");
    app.update(key(Key::Enter));
    // The modal overlays the middle of the form; the title row stays visible.
    assert_frame_snapshot(
        "validation_modal",
        &app.render(),
        &expected_frame(&[
            " marks  0/0 shown  category:all  search:-",
            "Enter:dismiss",
            "Add bookmark",
            "\u{25b8} Title:    only a title_",
            "  Title and URL are required.",
            "  press Enter to continue",
            "",
            "",
        ]),
    );
}
