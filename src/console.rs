//! Terminal boundary used by the selection widget.
//!
//! The widget talks to the terminal exclusively through the [`Console`]
//! trait: a blocking key source plus a display surface with cursor row
//! get/set, geometry get/set, text writes and a foreground color. The
//! default implementation is [`CrosstermConsole`]; tests drive the widget
//! through scripted implementations of the same trait.

use std::io::{stdin, stdout, Stdout, Write};

use crossterm::cursor::{self, Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, SetForegroundColor};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};

use crate::error::Result;

/// A key press, reduced to the classes the selection loop reacts to.
///
/// Character keys carry the typed character; every other key the backing
/// terminal can report is swallowed by [`Console::read_key`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Char(char),
}

/// Boundary collaborator for the selection widget.
///
/// `cursor_row` doubles as the capability probe: an implementation that
/// cannot address the cursor returns an error from it, and the widget
/// switches to the numbered fallback prompt for the rest of the call.
pub trait Console {
    /// Blocks until the user presses a key the widget understands.
    fn read_key(&mut self) -> Result<Key>;

    /// Reads a whole line of input (fallback prompt only).
    fn read_line(&mut self) -> Result<String>;

    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Current cursor row, 0-based from the top of the visible buffer.
    fn cursor_row(&mut self) -> Result<u16>;

    /// Moves the cursor to column 0 of `row`.
    fn move_to_row(&mut self, row: u16) -> Result<()>;

    /// Blanks `row` and leaves the cursor at its start.
    fn clear_row(&mut self, row: u16) -> Result<()>;

    fn window_width(&mut self) -> Result<u16>;

    /// Width used for wrap measurement. May differ from the window width
    /// on surfaces with a wider scrollback buffer.
    fn buffer_width(&mut self) -> Result<u16>;

    fn set_buffer_width(&mut self, width: u16) -> Result<()>;

    fn foreground(&self) -> Color;

    fn set_foreground(&mut self, color: Color) -> Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
    }
}

/// Crossterm-backed console for real terminals.
pub struct CrosstermConsole {
    out: Stdout,
    foreground: Color,
    buffer_width: Option<u16>,
}

impl CrosstermConsole {
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: stdout(),
            foreground: Color::Reset,
            buffer_width: None,
        }
    }
}

impl Default for CrosstermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for CrosstermConsole {
    fn read_key(&mut self) -> Result<Key> {
        enable_raw_mode()?;
        let _raw_mode_guard = RawModeGuard;

        loop {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }

                let key = match key_event.code {
                    KeyCode::Up => Key::Up,
                    KeyCode::Down => Key::Down,
                    KeyCode::PageUp => Key::PageUp,
                    KeyCode::PageDown => Key::PageDown,
                    KeyCode::Home => Key::Home,
                    KeyCode::End => Key::End,
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Char(c) => Key::Char(c),
                    _ => continue,
                };

                return Ok(key);
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut input = String::new();
        stdin().read_line(&mut input)?;
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text), Print("\n"))?;
        self.out.flush()?;
        Ok(())
    }

    fn cursor_row(&mut self) -> Result<u16> {
        let (_, row) = cursor::position()?;
        Ok(row)
    }

    fn move_to_row(&mut self, row: u16) -> Result<()> {
        execute!(self.out, MoveTo(0, row))?;
        Ok(())
    }

    fn clear_row(&mut self, row: u16) -> Result<()> {
        execute!(self.out, MoveTo(0, row), Clear(ClearType::CurrentLine))?;
        Ok(())
    }

    fn window_width(&mut self) -> Result<u16> {
        let (width, _) = terminal::size()?;
        Ok(width)
    }

    fn buffer_width(&mut self) -> Result<u16> {
        match self.buffer_width {
            Some(width) => Ok(width),
            None => self.window_width(),
        }
    }

    fn set_buffer_width(&mut self, width: u16) -> Result<()> {
        // ANSI terminals wrap at the window edge; the buffer width is a
        // logical measurement width clamped to what the terminal shows.
        let window_width = self.window_width()?;
        self.buffer_width = Some(width.min(window_width));
        Ok(())
    }

    fn foreground(&self) -> Color {
        self.foreground
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        execute!(self.out, SetForegroundColor(color))?;
        self.foreground = color;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            execute!(self.out, Show)?;
        } else {
            execute!(self.out, Hide)?;
        }
        Ok(())
    }
}
