//! Add-form view-model: three fields, focus movement, character editing.
//!
//! The form captures all input while active. Submission and validation live
//! in the app layer; on rejection the field contents are kept so the user
//! can correct them, matching form semantics where only a successful submit
//! clears the fields.

use marks_term::input::{InputEvent, Key, KeyEvent};
use marks_term::render::{RenderFrame, TextRole};

// ---------------------------------------------------------------------------
// FormField
// ---------------------------------------------------------------------------

/// The three form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Url,
    Category,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Title, Self::Url, Self::Category];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Url => "URL",
            Self::Category => "Category",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Url,
            Self::Url => Self::Category,
            Self::Category => Self::Title,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Category,
            Self::Url => Self::Title,
            Self::Category => Self::Url,
        }
    }
}

// ---------------------------------------------------------------------------
// AddForm
// ---------------------------------------------------------------------------

/// Editable state of the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    title: String,
    url: String,
    category: String,
    focus: FormField,
}

impl AddForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn focus(&self) -> FormField {
        self.focus
    }

    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Url => &self.url,
            FormField::Category => &self.category,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        self.field_mut().push(ch);
    }

    pub fn pop_char(&mut self) {
        self.field_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Reset all fields and focus; called after a successful submit or a
    /// cancel, never after a rejected submit.
    pub fn clear(&mut self) {
        self.title.clear();
        self.url.clear();
        self.category.clear();
        self.focus = FormField::Title;
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Url => &mut self.url,
            FormField::Category => &mut self.category,
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// What the app layer should do after a form keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    /// Enter pressed - validate and add.
    Submit,
    /// Esc pressed - discard the form and return to the list.
    Cancel,
}

pub fn apply_form_input(form: &mut AddForm, event: InputEvent) -> FormAction {
    let InputEvent::Key(KeyEvent { key, modifiers }) = event else {
        return FormAction::None;
    };
    match key {
        Key::Escape => return FormAction::Cancel,
        Key::Enter => return FormAction::Submit,
        Key::Tab if modifiers.shift => form.focus_prev(),
        Key::Tab | Key::Down => form.focus_next(),
        Key::Up => form.focus_prev(),
        Key::Backspace => form.pop_char(),
        Key::Char(ch) if !modifiers.ctrl && !modifiers.alt => form.push_char(ch),
        _ => {}
    }
    FormAction::None
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw the form fields starting at `start_row`. The focused field gets a
/// cursor marker and a trailing underscore.
pub fn render_form_rows(frame: &mut RenderFrame, form: &AddForm, start_row: usize, width: usize) {
    frame.draw_text(0, start_row, "Add bookmark", TextRole::Accent);
    for (offset, field) in FormField::ALL.into_iter().enumerate() {
        let row = start_row + 1 + offset;
        let focused = form.focus() == field;
        let marker = if focused { "\u{25b8} " } else { "  " };
        let cursor = if focused { "_" } else { "" };
        let line = format!(
            "{marker}{label:<9} {value}{cursor}",
            label = format!("{}:", field.label()),
            value = form.value(field),
        );
        let role = if focused {
            TextRole::Primary
        } else {
            TextRole::Muted
        };
        let clipped: String = line.chars().take(width).collect();
        frame.draw_text(0, row, &clipped, role);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
