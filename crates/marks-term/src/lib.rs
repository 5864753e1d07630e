//! marks-term: terminal presentation primitives.
//!
//! Keeps the app crate insulated from the terminal backend: screens are
//! composed into a [`render::RenderFrame`] cell grid and input arrives as
//! [`input::InputEvent`] values. Only the binary touches the real terminal.

/// Theme primitives.
pub mod style {
    /// Supported theme families.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ThemeKind {
        Dark,
        Light,
        HighContrast,
    }

    impl ThemeKind {
        /// The next theme in the cycling order.
        #[must_use]
        pub fn next(self) -> Self {
            match self {
                Self::Dark => Self::Light,
                Self::Light => Self::HighContrast,
                Self::HighContrast => Self::Dark,
            }
        }
    }

    /// Terminal 256-color indexes for each semantic slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Palette {
        pub background: u8,
        pub foreground: u8,
        pub muted: u8,
        pub accent: u8,
        pub success: u8,
        pub danger: u8,
    }

    /// Resolved theme handed to every frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Theme {
        pub kind: ThemeKind,
        pub palette: Palette,
    }

    impl Theme {
        /// Build the palette for a theme family.
        #[must_use]
        pub fn for_kind(kind: ThemeKind) -> Self {
            let palette = match kind {
                ThemeKind::Dark => Palette {
                    background: 16,
                    foreground: 252,
                    muted: 244,
                    accent: 45,
                    success: 41,
                    danger: 197,
                },
                ThemeKind::Light => Palette {
                    background: 255,
                    foreground: 234,
                    muted: 244,
                    accent: 25,
                    success: 28,
                    danger: 160,
                },
                ThemeKind::HighContrast => Palette {
                    background: 16,
                    foreground: 231,
                    muted: 250,
                    accent: 51,
                    success: 118,
                    danger: 203,
                },
            };
            Self { kind, palette }
        }
    }

    impl Default for Theme {
        fn default() -> Self {
            Self::for_kind(ThemeKind::Dark)
        }
    }
}

/// Frame and cell primitives.
pub mod render {
    use super::style::Theme;

    /// Frame dimensions in terminal cells.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameSize {
        pub width: usize,
        pub height: usize,
    }

    /// Resolved per-cell style. Colors are ANSI-256 indexes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellStyle {
        pub fg: u8,
        pub bg: u8,
        pub bold: bool,
        pub dim: bool,
    }

    /// One cell of the frame grid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameCell {
        pub glyph: char,
        pub style: CellStyle,
    }

    /// Semantic role for a run of text; the frame maps roles to the theme.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TextRole {
        Primary,
        Muted,
        Accent,
        Success,
        Danger,
    }

    /// A cell grid the app renders screens into. Cheap to build per redraw;
    /// [`RenderFrame::snapshot`] gives a text-only view for tests and for
    /// non-interactive output.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RenderFrame {
        size: FrameSize,
        cells: Vec<FrameCell>,
        theme: Theme,
    }

    impl RenderFrame {
        /// A blank frame filled with the theme's background.
        #[must_use]
        pub fn new(size: FrameSize, theme: Theme) -> Self {
            let blank = FrameCell {
                glyph: ' ',
                style: CellStyle {
                    fg: theme.palette.foreground,
                    bg: theme.palette.background,
                    bold: false,
                    dim: false,
                },
            };
            Self {
                size,
                cells: vec![blank; size.width.saturating_mul(size.height)],
                theme,
            }
        }

        #[must_use]
        pub fn size(&self) -> FrameSize {
            self.size
        }

        #[must_use]
        pub fn theme(&self) -> Theme {
            self.theme
        }

        /// One frame cell, or `None` outside the grid.
        #[must_use]
        pub fn cell(&self, x: usize, y: usize) -> Option<FrameCell> {
            if x >= self.size.width || y >= self.size.height {
                return None;
            }
            Some(self.cells[y * self.size.width + x])
        }

        /// Draw text on a single row, clipped to the frame width.
        pub fn draw_text(&mut self, x: usize, y: usize, text: &str, role: TextRole) {
            if y >= self.size.height || x >= self.size.width {
                return;
            }
            let style = self.style_for_role(role);
            for (offset, glyph) in text.chars().enumerate() {
                let col = x + offset;
                if col >= self.size.width {
                    break;
                }
                self.cells[y * self.size.width + col] = FrameCell { glyph, style };
            }
        }

        /// The glyphs of one row as a string.
        #[must_use]
        pub fn row_text(&self, y: usize) -> String {
            if y >= self.size.height {
                return String::new();
            }
            let start = y * self.size.width;
            self.cells[start..start + self.size.width]
                .iter()
                .map(|cell| cell.glyph)
                .collect()
        }

        /// Text-only snapshot of the whole frame, rows joined by newlines.
        #[must_use]
        pub fn snapshot(&self) -> String {
            (0..self.size.height)
                .map(|row| self.row_text(row))
                .collect::<Vec<_>>()
                .join("\n")
        }

        fn style_for_role(&self, role: TextRole) -> CellStyle {
            let palette = self.theme.palette;
            let (fg, bold, dim) = match role {
                TextRole::Primary => (palette.foreground, false, false),
                TextRole::Muted => (palette.muted, false, true),
                TextRole::Accent => (palette.accent, true, false),
                TextRole::Success => (palette.success, false, false),
                TextRole::Danger => (palette.danger, true, false),
            };
            CellStyle {
                fg,
                bg: palette.background,
                bold,
                dim,
            }
        }
    }
}

/// Input events as the app sees them, decoupled from the terminal backend.
pub mod input {
    /// Keys the bookmark screens care about.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Key {
        Char(char),
        Enter,
        Escape,
        Tab,
        Backspace,
        Up,
        Down,
    }

    /// Keyboard modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers {
        pub shift: bool,
        pub ctrl: bool,
        pub alt: bool,
    }

    impl Modifiers {
        #[must_use]
        pub const fn none() -> Self {
            Self {
                shift: false,
                ctrl: false,
                alt: false,
            }
        }
    }

    /// A key press with its modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeyEvent {
        pub key: Key,
        pub modifiers: Modifiers,
    }

    impl KeyEvent {
        #[must_use]
        pub const fn plain(key: Key) -> Self {
            Self {
                key,
                modifiers: Modifiers::none(),
            }
        }
    }

    /// Terminal size change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ResizeEvent {
        pub width: usize,
        pub height: usize,
    }

    /// The event stream consumed by the app shell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum InputEvent {
        Key(KeyEvent),
        Resize(ResizeEvent),
    }

    /// High-level list-navigation actions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum UiAction {
        Noop,
        MoveUp,
        MoveDown,
        Confirm,
        Cancel,
    }

    /// Map an event to a navigation action (arrows plus vi-style j/k).
    /// Text-entry modes consume characters before consulting this.
    #[must_use]
    pub fn translate_input(event: &InputEvent) -> UiAction {
        let InputEvent::Key(KeyEvent { key, modifiers }) = event else {
            return UiAction::Noop;
        };
        if modifiers.ctrl || modifiers.alt {
            return UiAction::Noop;
        }
        match key {
            Key::Up | Key::Char('k') => UiAction::MoveUp,
            Key::Down | Key::Char('j') => UiAction::MoveDown,
            Key::Enter => UiAction::Confirm,
            Key::Escape => UiAction::Cancel,
            _ => UiAction::Noop,
        }
    }
}

pub mod snapshot;
