//! Cell grid with per-cell dirty bits.
//!
//! Symbols are `CompactString`s so single graphemes stay inline. A cell is
//! only marked dirty when its content actually changes, which lets a frame
//! be redrawn from scratch every tick while the renderer still emits only
//! the difference.

use bitvec::prelude::*;
use compact_str::CompactString;
use unicode_width::UnicodeWidthStr;

use crate::color::Color;

/// Text attributes for a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const ITALIC: Self = Self(1 << 1);
    pub const UNDERLINE: Self = Self(1 << 2);
    pub const DIM: Self = Self(1 << 3);
    pub const REVERSE: Self = Self(1 << 4);

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.with(rhs)
    }
}

/// Foreground, background and attributes applied to written text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub modifiers: Modifiers,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Color::WHITE,
            bg: Color::TRANSPARENT,
            modifiers: Modifiers::NONE,
        }
    }
}

impl Style {
    pub const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bg: Color::TRANSPARENT,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn on(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    pub const fn bold(mut self) -> Self {
        self.modifiers = self.modifiers.with(Modifiers::BOLD);
        self
    }

    pub const fn with(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers.with(modifiers);
        self
    }
}

/// One terminal cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: CompactString,
    pub style: Style,
    /// Display width: 1 normally, 2 for wide glyphs, 0 for the cell a wide
    /// glyph spills into.
    width: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: CompactString::const_new(" "),
            style: Style::default(),
            width: 1,
        }
    }
}

impl Cell {
    pub fn new(symbol: &str, style: Style) -> Self {
        Self {
            symbol: CompactString::new(symbol),
            style,
            width: UnicodeWidthStr::width(symbol).clamp(1, 2) as u8,
        }
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn is_continuation(&self) -> bool {
        self.width == 0
    }

    /// Overwrite in place. Returns whether anything changed.
    fn update(&mut self, symbol: &str, style: Style) -> bool {
        let width = UnicodeWidthStr::width(symbol).clamp(1, 2) as u8;
        if self.symbol == symbol && self.style == style && self.width == width {
            return false;
        }
        self.symbol.clear();
        self.symbol.push_str(symbol);
        self.style = style;
        self.width = width;
        true
    }

    fn make_continuation(&mut self, style: Style) -> bool {
        if self.width == 0 && self.symbol.is_empty() && self.style == style {
            return false;
        }
        self.symbol.clear();
        self.style = style;
        self.width = 0;
        true
    }
}

/// Grid of cells with dirty tracking.
#[derive(Debug, Clone)]
pub struct CellBuffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
    dirty: BitVec,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            cells: vec![Cell::default(); size],
            width,
            height,
            dirty: bitvec![1; size],
        }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    /// Linear index to `(x, y)`.
    pub fn coords(&self, idx: usize) -> (u16, u16) {
        let width = usize::from(self.width.max(1));
        ((idx % width) as u16, (idx / width) as u16)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        (x < self.width && y < self.height).then(|| &self.cells[self.index(x, y)])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write one grapheme at `(x, y)`. Wide graphemes also claim `x + 1`;
    /// a wide grapheme that does not fit on the row is replaced by a space.
    /// Returns the number of columns consumed.
    pub fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) -> u16 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let wide = UnicodeWidthStr::width(symbol) > 1;
        if wide && x + 1 >= self.width {
            self.put(x, y, " ", style);
            return 1;
        }
        let idx = self.index(x, y);
        if self.cells[idx].update(symbol, style) {
            self.dirty.set(idx, true);
        }
        if wide {
            if self.cells[idx + 1].make_continuation(style) {
                self.dirty.set(idx + 1, true);
            }
            2
        } else {
            1
        }
    }

    /// Paint a rectangle with spaces in `style`.
    pub fn fill(&mut self, x: u16, y: u16, width: u16, height: u16, style: Style) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for cy in y..y_end {
            for cx in x..x_end {
                self.put(cx, cy, " ", style);
            }
        }
    }

    /// Reset every cell to a blank in `style`.
    pub fn clear(&mut self, style: Style) {
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            if cell.update(" ", style) {
                self.dirty.set(idx, true);
            }
        }
    }

    /// Resize, discarding content; every cell becomes dirty.
    pub fn resize(&mut self, width: u16, height: u16) {
        let size = usize::from(width) * usize::from(height);
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(size, Cell::default());
        self.dirty = bitvec![1; size];
    }

    pub fn mark_all_dirty(&mut self) {
        self.dirty.fill(true);
    }

    pub fn clear_dirty(&mut self) {
        self.dirty.fill(false);
    }

    pub fn dirty_count(&self) -> usize {
        self.dirty.count_ones()
    }

    pub fn iter_dirty(&self) -> impl Iterator<Item = usize> + '_ {
        self.dirty.iter_ones()
    }

    /// Text of row `y` with trailing blanks trimmed. Continuation cells
    /// contribute nothing.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        let row = &self.cells[start..start + usize::from(self.width)];
        let text: String = row.iter().map(|c| c.symbol.as_str()).collect();
        text.trim_end().to_string()
    }

    /// Whole buffer as plain text, one line per row.
    pub fn to_plain_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(0xff, 0x2d, 0x2d);

    #[test]
    fn test_modifiers() {
        let m = Modifiers::BOLD | Modifiers::DIM;
        assert!(m.contains(Modifiers::BOLD));
        assert!(m.contains(Modifiers::DIM));
        assert!(!m.contains(Modifiers::REVERSE));
        assert!(m.without(Modifiers::BOLD).contains(Modifiers::DIM));
        assert!(Modifiers::NONE.is_empty());
    }

    #[test]
    fn test_new_buffer_all_dirty() {
        let buffer = CellBuffer::new(10, 4);
        assert_eq!(buffer.len(), 40);
        assert_eq!(buffer.dirty_count(), 40);
    }

    #[test]
    fn test_put_marks_only_changes() {
        let mut buffer = CellBuffer::new(10, 4);
        buffer.clear_dirty();
        buffer.put(2, 1, "X", Style::fg(RED));
        assert_eq!(buffer.dirty_count(), 1);
        buffer.clear_dirty();
        buffer.put(2, 1, "X", Style::fg(RED));
        assert_eq!(buffer.dirty_count(), 0);
    }

    #[test]
    fn test_put_out_of_bounds() {
        let mut buffer = CellBuffer::new(4, 2);
        assert_eq!(buffer.put(4, 0, "X", Style::default()), 0);
        assert_eq!(buffer.put(0, 2, "X", Style::default()), 0);
        assert!(buffer.get(4, 0).is_none());
    }

    #[test]
    fn test_wide_glyph_claims_two_cells() {
        let mut buffer = CellBuffer::new(6, 1);
        assert_eq!(buffer.put(1, 0, "日", Style::default()), 2);
        assert_eq!(buffer.get(1, 0).unwrap().width(), 2);
        assert!(buffer.get(2, 0).unwrap().is_continuation());
        assert_eq!(buffer.row_text(0), " 日");
    }

    #[test]
    fn test_wide_glyph_at_edge_becomes_space() {
        let mut buffer = CellBuffer::new(3, 1);
        assert_eq!(buffer.put(2, 0, "日", Style::default()), 1);
        assert_eq!(buffer.get(2, 0).unwrap().symbol.as_str(), " ");
    }

    #[test]
    fn test_clear_redirties_changed_cells_only() {
        let mut buffer = CellBuffer::new(5, 2);
        buffer.clear_dirty();
        buffer.put(0, 0, "a", Style::default());
        buffer.put(1, 0, "b", Style::default());
        buffer.clear_dirty();
        buffer.clear(Style::default());
        assert_eq!(buffer.dirty_count(), 2);
    }

    #[test]
    fn test_fill_clips() {
        let mut buffer = CellBuffer::new(4, 3);
        let style = Style::default().on(RED);
        buffer.fill(2, 1, 10, 10, style);
        assert_eq!(buffer.get(3, 2).unwrap().style.bg, RED);
        assert_eq!(buffer.get(1, 1).unwrap().style.bg, Color::TRANSPARENT);
    }

    #[test]
    fn test_resize() {
        let mut buffer = CellBuffer::new(4, 3);
        buffer.clear_dirty();
        buffer.resize(8, 2);
        assert_eq!(buffer.len(), 16);
        assert_eq!(buffer.dirty_count(), 16);
        assert_eq!(buffer.coords(9), (1, 1));
    }

    #[test]
    fn test_plain_text() {
        let mut buffer = CellBuffer::new(5, 2);
        for (i, ch) in ["V", "E", "L"].iter().enumerate() {
            buffer.put(i as u16, 0, ch, Style::default());
        }
        assert_eq!(buffer.to_plain_text(), "VEL\n");
    }
}
