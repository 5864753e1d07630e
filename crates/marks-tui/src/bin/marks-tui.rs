//! marks terminal binary.
//!
//! Attached to a terminal it runs the interactive bookmark screen; piped or
//! redirected it prints a plain-text snapshot of the current list instead.

use std::io::{self, IsTerminal, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, Event as TerminalEvent, KeyCode as TerminalKeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use marks_core::storage::BlobStore;
use marks_term::input::{InputEvent, Key, KeyEvent, Modifiers, ResizeEvent};
use marks_term::render::{CellStyle, RenderFrame};
use marks_tui::app::{App, Command};

fn main() {
    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    if interactive {
        if let Err(err) = run_interactive() {
            eprintln!("marks-tui: {err}");
            std::process::exit(1);
        }
    } else {
        // Raw-mode sessions own the screen; logging is only useful here.
        env_logger::init();
        print!("{}", render_snapshot_text());
    }
}

// ---------------------------------------------------------------------------
// Interactive runtime
// ---------------------------------------------------------------------------

fn run_interactive() -> Result<(), String> {
    let mut session =
        TerminalSession::enter().map_err(|err| format!("enter terminal mode: {err}"))?;
    let mut app = App::new(BlobStore::at_default_location());

    let (width, height) = terminal_size().map_err(|err| format!("read terminal size: {err}"))?;
    let _ = app.update(InputEvent::Resize(ResizeEvent { width, height }));

    loop {
        let frame = app.render();
        render_frame(&mut session.stdout, &frame)
            .map_err(|err| format!("render frame: {err}"))?;

        let event = event::read().map_err(|err| format!("read terminal event: {err}"))?;
        if is_interrupt(&event) {
            break;
        }
        let Some(input) = map_terminal_event(event) else {
            continue;
        };
        if app.update(input) == Command::Quit {
            break;
        }
    }
    Ok(())
}

fn terminal_size() -> io::Result<(usize, usize)> {
    let (width, height) = terminal::size()?;
    Ok((usize::from(width), usize::from(height)))
}

fn map_terminal_event(event: TerminalEvent) -> Option<InputEvent> {
    match event {
        TerminalEvent::Resize(width, height) => Some(InputEvent::Resize(ResizeEvent {
            width: usize::from(width),
            height: usize::from(height),
        })),
        TerminalEvent::Key(key_event) => {
            if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                return None;
            }

            let key = match key_event.code {
                TerminalKeyCode::Char(ch) => Key::Char(ch),
                TerminalKeyCode::Enter => Key::Enter,
                TerminalKeyCode::Esc => Key::Escape,
                TerminalKeyCode::Tab | TerminalKeyCode::BackTab => Key::Tab,
                TerminalKeyCode::Backspace => Key::Backspace,
                TerminalKeyCode::Up => Key::Up,
                TerminalKeyCode::Down => Key::Down,
                _ => return None,
            };

            let mut modifiers = Modifiers {
                shift: key_event.modifiers.contains(KeyModifiers::SHIFT),
                ctrl: key_event.modifiers.contains(KeyModifiers::CONTROL),
                alt: key_event.modifiers.contains(KeyModifiers::ALT),
            };
            if matches!(key_event.code, TerminalKeyCode::BackTab) {
                modifiers.shift = true;
            }

            Some(InputEvent::Key(KeyEvent { key, modifiers }))
        }
        _ => None,
    }
}

fn is_interrupt(event: &TerminalEvent) -> bool {
    let TerminalEvent::Key(key_event) = event else {
        return false;
    };
    if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return false;
    }
    matches!(key_event.code, TerminalKeyCode::Char('c'))
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
}

fn render_frame<W: Write>(out: &mut W, frame: &RenderFrame) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    let size = frame.size();

    for y in 0..size.height {
        queue!(out, MoveTo(0, to_u16(y)))?;
        let mut style = None;
        for x in 0..size.width {
            if let Some(cell) = frame.cell(x, y) {
                if style != Some(cell.style) {
                    queue_style(out, cell.style)?;
                    style = Some(cell.style);
                }
                queue!(out, Print(cell.glyph))?;
            }
        }
    }

    queue!(
        out,
        SetAttribute(Attribute::Reset),
        MoveTo(0, to_u16(size.height))
    )?;
    out.flush()
}

fn queue_style<W: Write>(out: &mut W, style: CellStyle) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(Color::AnsiValue(style.fg)),
        SetBackgroundColor(Color::AnsiValue(style.bg)),
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    } else if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_u16(value: usize) -> u16 {
    value.min(usize::from(u16::MAX)) as u16
}

struct TerminalSession {
    stdout: io::Stdout,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            LeaveAlternateScreen,
            Show,
            MoveTo(0, 0)
        );
        let _ = terminal::disable_raw_mode();
    }
}

// ---------------------------------------------------------------------------
// Non-interactive snapshot
// ---------------------------------------------------------------------------

fn render_snapshot_text() -> String {
    let mut app = App::new(BlobStore::at_default_location());
    // Tall enough for every entry's two rows plus the chrome.
    let rows = (3 + 2 * app.shelf().len()).max(5);
    let _ = app.update(InputEvent::Resize(ResizeEvent {
        width: 80,
        height: rows,
    }));

    let frame = app.render();
    let mut out = String::new();
    for row in frame.snapshot().lines() {
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
