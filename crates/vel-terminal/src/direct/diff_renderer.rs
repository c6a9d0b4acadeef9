//! Differential renderer.
//!
//! Keeps a copy of what is currently on screen and, for every dirty cell,
//! emits escape sequences only if the cell differs from that copy. Cursor
//! moves and style changes are skipped when the terminal is already in the
//! right state.

use std::io::{self, BufWriter, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{queue, QueueableCommand};

use super::cell_buffer::{Cell, CellBuffer, Modifiers, Style};
use crate::color::ColorMode;

/// Emits the difference between consecutive frames.
#[derive(Debug)]
pub struct DiffRenderer {
    color_mode: ColorMode,
    /// Last frame written, same geometry as the buffer. Empty forces a full
    /// redraw.
    front: Vec<Cell>,
    /// Last known cursor position (`u16::MAX` = unknown).
    cursor_x: u16,
    cursor_y: u16,
    last_style: Option<Style>,
    cells_written: usize,
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::with_color_mode(ColorMode::detect())
    }
}

impl DiffRenderer {
    pub const fn with_color_mode(color_mode: ColorMode) -> Self {
        Self {
            color_mode,
            front: Vec::new(),
            cursor_x: u16::MAX,
            cursor_y: u16::MAX,
            last_style: None,
            cells_written: 0,
        }
    }

    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Forget the on-screen state. Call after a resize or external clear.
    pub fn reset(&mut self) {
        self.front.clear();
        self.cursor_x = u16::MAX;
        self.cursor_y = u16::MAX;
        self.last_style = None;
    }

    /// Cells emitted by the last flush.
    pub const fn cells_written(&self) -> usize {
        self.cells_written
    }

    /// Write dirty cells that differ from the screen and clear dirty bits.
    /// Returns the number of cells emitted.
    pub fn flush<W: Write>(&mut self, buffer: &mut CellBuffer, writer: &mut W) -> io::Result<usize> {
        self.cells_written = 0;
        if self.front.len() != buffer.len() {
            self.front = vec![Cell::new("\0", Style::default()); buffer.len()];
            self.cursor_x = u16::MAX;
            self.cursor_y = u16::MAX;
        }

        let mut out = BufWriter::with_capacity(8192, writer);
        let width = buffer.width();

        for idx in buffer.iter_dirty() {
            let cell = &buffer.cells()[idx];
            if cell.is_continuation() || self.front[idx] == *cell {
                continue;
            }
            let (x, y) = buffer.coords(idx);

            if self.cursor_x != x || self.cursor_y != y {
                queue!(out, MoveTo(x, y))?;
            }
            if self.last_style != Some(cell.style) {
                self.apply_style(&mut out, cell.style)?;
                self.last_style = Some(cell.style);
            }
            queue!(out, Print(cell.symbol.as_str()))?;

            self.cursor_x = x.saturating_add(u16::from(cell.width()));
            self.cursor_y = y;
            if self.cursor_x >= width {
                self.cursor_x = u16::MAX;
            }
            self.front[idx] = cell.clone();
            self.cells_written += 1;
        }

        if self.cells_written > 0 {
            queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
            self.last_style = None;
        }
        buffer.clear_dirty();
        out.flush()?;
        Ok(self.cells_written)
    }

    /// Mark everything dirty, forget the screen and flush.
    pub fn render_full<W: Write>(
        &mut self,
        buffer: &mut CellBuffer,
        writer: &mut W,
    ) -> io::Result<usize> {
        self.reset();
        buffer.mark_all_dirty();
        self.flush(buffer, writer)
    }

    fn apply_style<W: Write>(&self, writer: &mut W, style: Style) -> io::Result<()> {
        // Attribute reset must precede colors or it clears them.
        writer.queue(SetAttribute(Attribute::Reset))?;
        writer.queue(SetForegroundColor(self.color_mode.to_crossterm(style.fg)))?;
        writer.queue(SetBackgroundColor(self.color_mode.to_crossterm(style.bg)))?;

        let attributes = [
            (Modifiers::BOLD, Attribute::Bold),
            (Modifiers::ITALIC, Attribute::Italic),
            (Modifiers::UNDERLINE, Attribute::Underlined),
            (Modifiers::DIM, Attribute::Dim),
            (Modifiers::REVERSE, Attribute::Reverse),
        ];
        for (modifier, attribute) in attributes {
            if style.modifiers.contains(modifier) {
                writer.queue(SetAttribute(attribute))?;
            }
        }
        Ok(())
    }
}
