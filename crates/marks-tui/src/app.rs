//! App shell for the bookmark screen.
//!
//! Owns the shelf, the storage handle, and the filter/search control
//! values; routes every input event through the active mode and composes
//! the full frame. Every handler runs to completion before the next event
//! is read, and every successful mutation persists before the next redraw.

use chrono::Utc;
use marks_core::query;
use marks_core::shelf::Shelf;
use marks_core::storage::BlobStore;
use marks_term::input::{translate_input, InputEvent, Key, KeyEvent, UiAction};
use marks_term::render::{FrameSize, RenderFrame, TextRole};
use marks_term::style::Theme;

use crate::export;
use crate::form::{apply_form_input, render_form_rows, AddForm, FormAction, FormField};
use crate::list::{render_list_rows, ListState};

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Input modes. Exactly one is active; Modal blocks everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    AddForm,
    Search,
    Modal,
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Commands handed back to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The bookmark manager application state.
pub struct App {
    shelf: Shelf,
    store: BlobStore,

    mode: Mode,
    list: ListState,
    form: AddForm,
    search_term: String,
    category_filter: Option<String>,

    modal_message: String,
    status_line: String,
    status_err: bool,
    show_help: bool,

    theme: Theme,
    width: usize,
    height: usize,
}

impl App {
    /// Load the persisted list and start in Browse mode.
    #[must_use]
    pub fn new(store: BlobStore) -> Self {
        let shelf = Shelf::from_entries(store.load());
        Self {
            shelf,
            store,
            mode: Mode::default(),
            list: ListState::new(),
            form: AddForm::new(),
            search_term: String::new(),
            category_filter: None,
            modal_message: String::new(),
            status_line: String::new(),
            status_err: false,
            show_help: false,
            theme: Theme::default(),
            width: 100,
            height: 30,
        }
    }

    // -- accessors -----------------------------------------------------------

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    #[must_use]
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn category_filter(&self) -> Option<&str> {
        self.category_filter.as_deref()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    // -- update --------------------------------------------------------------

    /// Process one input event. Synchronous; returns what the event loop
    /// should do next.
    pub fn update(&mut self, event: InputEvent) -> Command {
        if let InputEvent::Resize(resize) = event {
            self.width = resize.width;
            self.height = resize.height;
            return Command::None;
        }

        // The help overlay swallows the next key.
        if self.show_help {
            self.show_help = false;
            return Command::None;
        }

        match self.mode {
            Mode::Modal => {
                self.update_modal(event);
                Command::None
            }
            Mode::AddForm => {
                self.update_form(event);
                Command::None
            }
            Mode::Search => {
                self.update_search(event);
                Command::None
            }
            Mode::Browse => self.update_browse(event),
        }
    }

    fn update_browse(&mut self, event: InputEvent) -> Command {
        if let InputEvent::Key(KeyEvent { key, modifiers }) = event {
            if modifiers.ctrl {
                match key {
                    Key::Char('c') => return Command::Quit,
                    Key::Char('t') => {
                        self.theme = Theme::for_kind(self.theme.kind.next());
                        self.set_status(&format!("theme: {:?}", self.theme.kind), false);
                        return Command::None;
                    }
                    _ => return Command::None,
                }
            }
            if !modifiers.alt {
                match key {
                    Key::Char('q') => return Command::Quit,
                    Key::Char('a') => {
                        self.mode = Mode::AddForm;
                        return Command::None;
                    }
                    Key::Char('d') => {
                        self.delete_selected();
                        return Command::None;
                    }
                    Key::Char('/') => {
                        self.mode = Mode::Search;
                        return Command::None;
                    }
                    Key::Char('c') => {
                        self.cycle_category();
                        return Command::None;
                    }
                    Key::Char('x') => {
                        self.export_markdown();
                        return Command::None;
                    }
                    Key::Char('?') => {
                        self.show_help = true;
                        return Command::None;
                    }
                    _ => {}
                }
            }
        }

        match translate_input(&event) {
            UiAction::MoveUp => self.list.move_up(),
            UiAction::MoveDown => self.list.move_down(self.visible_indices().len()),
            _ => {}
        }
        Command::None
    }

    fn update_form(&mut self, event: InputEvent) {
        match apply_form_input(&mut self.form, event) {
            FormAction::None => {}
            FormAction::Cancel => {
                self.form.clear();
                self.mode = Mode::Browse;
            }
            FormAction::Submit => self.submit_form(),
        }
    }

    fn update_search(&mut self, event: InputEvent) {
        let InputEvent::Key(KeyEvent { key, modifiers }) = event else {
            return;
        };
        match key {
            Key::Enter => self.mode = Mode::Browse,
            Key::Escape => {
                self.search_term.clear();
                self.list.reset();
                self.mode = Mode::Browse;
            }
            Key::Backspace => {
                self.search_term.pop();
                self.list.reset();
            }
            Key::Char(ch) if !modifiers.ctrl && !modifiers.alt => {
                self.search_term.push(ch);
                self.list.reset();
            }
            _ => {}
        }
    }

    fn update_modal(&mut self, event: InputEvent) {
        let InputEvent::Key(KeyEvent { key, .. }) = event else {
            return;
        };
        if matches!(key, Key::Enter | Key::Escape | Key::Char(' ')) {
            self.modal_message.clear();
            // Back to the form with its contents intact.
            self.mode = Mode::AddForm;
        }
    }

    // -- mutations -----------------------------------------------------------

    fn submit_form(&mut self) {
        let title = self.form.value(FormField::Title).to_owned();
        let url = self.form.value(FormField::Url).to_owned();
        let category = self.form.value(FormField::Category).to_owned();

        match self.shelf.add(&title, &url, &category) {
            Ok(added) => {
                let added_title = added.title.clone();
                self.set_status(&format!("added \"{added_title}\""), false);
                self.persist();
                self.form.clear();
                self.mode = Mode::Browse;
                self.list.clamp(self.visible_indices().len());
            }
            Err(err) => {
                // Blocking message; the form keeps its contents.
                self.modal_message = err.to_string();
                self.mode = Mode::Modal;
            }
        }
    }

    fn delete_selected(&mut self) {
        let indices = self.visible_indices();
        let Some(&full_idx) = indices.get(self.list.selected()) else {
            return;
        };
        if let Some(removed) = self.shelf.delete_at(full_idx) {
            self.set_status(&format!("deleted \"{}\"", removed.title), false);
            self.persist();
        }
        self.list.clamp(self.visible_indices().len());
    }

    fn cycle_category(&mut self) {
        let known = query::categories(self.shelf.list());
        self.category_filter = match &self.category_filter {
            None => known.first().cloned(),
            Some(current) => match known.iter().position(|category| category == current) {
                Some(pos) => known.get(pos + 1).cloned(),
                // Filter references a category that no longer exists.
                None => known.first().cloned(),
            },
        };
        self.list.reset();
    }

    fn export_markdown(&mut self) {
        let path = export::default_export_path(self.store.path());
        let stamp = Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
        match export::write_export(&path, self.shelf.list(), &stamp) {
            Ok(()) => self.set_status(&format!("exported to {}", path.display()), false),
            Err(err) => self.set_status(&format!("export failed: {err}"), true),
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(self.shelf.list()) {
            self.set_status(&format!("save failed: {err}"), true);
        }
    }

    fn set_status(&mut self, message: &str, is_err: bool) {
        self.status_line = message.to_owned();
        self.status_err = is_err;
    }

    fn visible_indices(&self) -> Vec<usize> {
        query::visible_indices(
            self.shelf.list(),
            self.category_filter.as_deref(),
            &self.search_term,
        )
    }

    // -- rendering -----------------------------------------------------------

    /// Compose the full frame for the current state.
    #[must_use]
    pub fn render(&self) -> RenderFrame {
        let width = self.width.max(1);
        let height = self.height.max(1);
        let mut frame = RenderFrame::new(FrameSize { width, height }, self.theme);

        let visible = self.visible_indices();

        // Row 0: header with counts and active filters.
        let header = format!(
            " marks  {shown}/{total} shown  category:{category}  search:{search}",
            shown = visible.len(),
            total = self.shelf.len(),
            category = self.category_filter.as_deref().unwrap_or("all"),
            search = if self.search_term.is_empty() {
                "-"
            } else {
                &self.search_term
            },
        );
        frame.draw_text(0, 0, &header, TextRole::Accent);
        if height == 1 {
            return frame;
        }

        // Row 1: key hints for the active mode.
        frame.draw_text(0, 1, self.hint_line(), TextRole::Muted);
        if height == 2 {
            return frame;
        }

        let body_start = 2;
        let body_height = height.saturating_sub(body_start + 1);

        match self.mode {
            Mode::AddForm | Mode::Modal => {
                render_form_rows(&mut frame, &self.form, body_start, width);
            }
            Mode::Browse | Mode::Search => {
                let mut list_start = body_start;
                let mut list_height = body_height;
                if self.mode == Mode::Search {
                    let prompt = format!("search> {}_", self.search_term);
                    frame.draw_text(0, list_start, &prompt, TextRole::Accent);
                    list_start += 1;
                    list_height = list_height.saturating_sub(1);
                }
                if visible.is_empty() {
                    frame.draw_text(0, list_start, self.empty_state_line(), TextRole::Muted);
                } else {
                    render_list_rows(
                        &mut frame,
                        self.shelf.list(),
                        &visible,
                        self.list.selected(),
                        list_start,
                        list_height,
                        width,
                    );
                }
            }
        }

        if self.mode == Mode::Modal {
            self.render_modal(&mut frame, height);
        }
        if self.show_help {
            self.render_help(&mut frame, body_start, body_height);
        }

        // Last row: transient status.
        if !self.status_line.is_empty() {
            let role = if self.status_err {
                TextRole::Danger
            } else {
                TextRole::Success
            };
            frame.draw_text(0, height - 1, &self.status_line, role);
        }
        frame
    }

    fn hint_line(&self) -> &'static str {
        if self.show_help {
            return "press any key to close help";
        }
        match self.mode {
            Mode::Browse => "a:add  d:delete  /:search  c:category  x:export  ?:help  q:quit",
            Mode::AddForm => "Enter:save  Tab:next field  Esc:cancel",
            Mode::Search => "type to filter  Enter:keep  Esc:clear",
            Mode::Modal => "Enter:dismiss",
        }
    }

    fn empty_state_line(&self) -> &'static str {
        if self.shelf.is_empty() {
            "No bookmarks saved yet - press a to add one"
        } else {
            "No bookmarks match the active filters"
        }
    }

    fn render_modal(&self, frame: &mut RenderFrame, height: usize) {
        let y = (height / 2).clamp(2, height.saturating_sub(2).max(2));
        frame.draw_text(2, y, &self.modal_message, TextRole::Danger);
        frame.draw_text(2, y + 1, "press Enter to continue", TextRole::Muted);
    }

    fn render_help(&self, frame: &mut RenderFrame, start_row: usize, max_rows: usize) {
        const HELP_LINES: [&str; 11] = [
            "marks keys",
            "",
            "  a        add bookmark",
            "  d        delete selected",
            "  /        search (live)",
            "  c        cycle category filter",
            "  x        export markdown",
            "  j/k      move selection",
            "  ctrl+t   cycle theme",
            "  q        quit",
            "",
        ];
        let width = frame.size().width;
        // Rows are padded to the full width so the list underneath does not
        // bleed through the overlay.
        for offset in 0..max_rows {
            let line = HELP_LINES.get(offset).copied().unwrap_or("");
            let padded = format!("{line:<width$}");
            frame.draw_text(0, start_row + offset, &padded, TextRole::Primary);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
