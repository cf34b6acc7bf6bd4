//! Full-screen terminal access: raw mode, keyboard polling, and clipped cell
//! writes into a frame buffer.
use crate::consts;
use crossterm::event::{poll, read, KeyEvent};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Rect, Size},
    style::Style,
    widgets::Widget,
    DefaultTerminal,
};
use std::io;
use std::time::Duration;
use thiserror::Error;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The terminal in raw mode on the alternate screen.  Dropping a `Surface`
/// restores the terminal to its original mode.
#[derive(Debug)]
pub(crate) struct Surface {
    terminal: DefaultTerminal,
}

impl Surface {
    /// Switch the terminal into raw mode on the alternate screen and hide the
    /// cursor.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the terminal could not be configured or if it is
    /// smaller than [`MIN_TERMINAL_SIZE`][consts::MIN_TERMINAL_SIZE].  The
    /// terminal is restored before returning an error.
    pub(crate) fn init() -> Result<Surface, SurfaceError> {
        let terminal = enter(ratatui::try_init, ratatui::restore)?;
        let mut surface = Surface { terminal };
        surface.terminal.hide_cursor()?;
        let Size { width, height } = surface.dimensions()?;
        if width < consts::MIN_TERMINAL_SIZE.width || height < consts::MIN_TERMINAL_SIZE.height {
            return Err(SurfaceError::TooSmall { width, height });
        }
        tracing::debug!(width, height, "terminal initialized");
        Ok(surface)
    }

    pub(crate) fn dimensions(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    /// Wait up to `timeout` for input and return the key that was pressed, if
    /// any.  Events other than key presses are consumed and discarded.
    pub(crate) fn poll_key(&self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if poll(timeout)? {
            Ok(read()?.as_key_press_event())
        } else {
            Ok(None)
        }
    }

    /// Draw `widget` over the whole screen and flush the frame to the
    /// terminal.
    pub(crate) fn present<W: Widget>(&mut self, widget: W) -> io::Result<()> {
        self.terminal
            .draw(|frame| frame.render_widget(widget, frame.area()))?;
        Ok(())
    }
}

/// Run `init` to acquire the terminal, calling `restore` if it fails partway
/// so that raw mode is not left enabled without a `Surface` to undo it
fn enter<T, I, R>(init: I, restore: R) -> io::Result<T>
where
    I: FnOnce() -> io::Result<T>,
    R: FnOnce(),
{
    init().inspect_err(|_| restore())
}

impl Drop for Surface {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

#[derive(Debug, Error)]
pub(crate) enum SurfaceError {
    #[error("failed to configure terminal")]
    Io(#[from] io::Error),
    #[error(
        "terminal is {width}x{height}, but at least {min_width}x{min_height} is required",
        min_width = consts::MIN_TERMINAL_SIZE.width,
        min_height = consts::MIN_TERMINAL_SIZE.height
    )]
    TooSmall { width: u16, height: u16 },
}

/// A drawing surface over part of a frame buffer.  Coordinates are relative
/// to the top-left corner of `area`, and writes that fall outside `area` are
/// dropped.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> Canvas<'a> {
    pub(crate) fn new(area: Rect, buf: &'a mut Buffer) -> Canvas<'a> {
        let area = area.intersection(buf.area);
        Canvas { area, buf }
    }
}

impl Canvas<'_> {
    /// Blank out every cell of the canvas
    pub(crate) fn clear(&mut self) {
        for pos in self.area.positions() {
            if let Some(cell) = self.buf.cell_mut(pos) {
                cell.reset();
            }
        }
    }

    pub(crate) fn write_char(&mut self, row: i32, col: i32, symbol: char, style: Style) {
        if let Some(cell) = self.cell_at(row, col) {
            cell.set_char(symbol).set_style(style);
        }
    }

    /// Write `text` starting at the given cell, clipping any characters that
    /// fall outside the canvas
    pub(crate) fn write_text(&mut self, row: i32, col: i32, text: &str, style: Style) {
        let mut col = col;
        for ch in text.chars() {
            let Some(width) = ch.width().filter(|&w| w > 0) else {
                continue;
            };
            self.write_char(row, col, ch, style);
            col = col.saturating_add(i32::try_from(width).unwrap_or(i32::MAX));
        }
    }

    fn cell_at(&mut self, row: i32, col: i32) -> Option<&mut Cell> {
        let row = u16::try_from(row).ok().filter(|&r| r < self.area.height)?;
        let col = u16::try_from(col).ok().filter(|&c| c < self.area.width)?;
        let x = self.area.x.checked_add(col)?;
        let y = self.area.y.checked_add(row)?;
        self.buf.cell_mut((x, y))
    }
}

/// Return the column at which `text` should start in order to be centered
/// within a span of `span` columns.  May be negative if `text` is wider than
/// the span.
pub(crate) fn centered_col(span: u16, text: &str) -> i32 {
    let width = i32::try_from(text.width()).unwrap_or(i32::MAX);
    i32::from(span) / 2 - width / 2
}
