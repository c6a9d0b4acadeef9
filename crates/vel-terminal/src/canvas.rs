//! Clipped drawing primitives over a [`CellBuffer`].

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::direct::{CellBuffer, Style};

/// Cell-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn contains(self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by `n` cells on every side.
    pub const fn inset(self, n: u16) -> Self {
        let twice = n.saturating_mul(2);
        Self {
            x: self.x.saturating_add(n),
            y: self.y.saturating_add(n),
            width: self.width.saturating_sub(twice),
            height: self.height.saturating_sub(twice),
        }
    }

    /// Shrink horizontally by `n` cells on each side.
    pub const fn pad_x(self, n: u16) -> Self {
        Self {
            x: self.x.saturating_add(n),
            y: self.y,
            width: self.width.saturating_sub(n.saturating_mul(2)),
            height: self.height,
        }
    }

    /// Split off the top `rows` rows.
    pub fn split_top(self, rows: u16) -> (Self, Self) {
        let rows = rows.min(self.height);
        (
            Self::new(self.x, self.y, self.width, rows),
            Self::new(self.x, self.y + rows, self.width, self.height - rows),
        )
    }

    /// Split off the left `cols` columns.
    pub fn split_left(self, cols: u16) -> (Self, Self) {
        let cols = cols.min(self.width);
        (
            Self::new(self.x, self.y, cols, self.height),
            Self::new(self.x + cols, self.y, self.width - cols, self.height),
        )
    }

    pub fn intersect(self, other: Self) -> Self {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 > x1 && y2 > y1 {
            Self::new(x1, y1, x2 - x1, y2 - y1)
        } else {
            Self::new(x1, y1, 0, 0)
        }
    }
}

/// Display width of `text` in terminal columns.
pub fn text_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(usize::from(u16::MAX)) as u16
}

/// Cut `text` to at most `width` columns, ending with `…` when shortened.
pub fn truncate(text: &str, width: u16) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = text_width(grapheme);
        if used + w > width - 1 {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` columns. Words longer than a line are split
/// on grapheme boundaries.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0u16;

    for word in text.split_whitespace() {
        let word_width = text_width(word);
        let needed = if line.is_empty() {
            word_width
        } else {
            line_width + 1 + word_width
        };
        if needed <= width {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            line_width = needed;
            continue;
        }
        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
            continue;
        }
        for grapheme in word.graphemes(true) {
            let w = text_width(grapheme);
            if line_width + w > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push_str(grapheme);
            line_width += w;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Box-drawing glyph set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
}

impl BorderGlyphs {
    pub const SINGLE: Self = Self {
        horizontal: "─",
        vertical: "│",
        top_left: "┌",
        top_right: "┐",
        bottom_left: "└",
        bottom_right: "┘",
    };
}

/// Writes into a [`CellBuffer`] through a stack of clip rectangles.
pub struct Painter<'a> {
    buffer: &'a mut CellBuffer,
    clip_stack: Vec<Rect>,
}

impl<'a> Painter<'a> {
    pub fn new(buffer: &'a mut CellBuffer) -> Self {
        let full = Rect::new(0, 0, buffer.width(), buffer.height());
        Self {
            buffer,
            clip_stack: vec![full],
        }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.buffer.width(), self.buffer.height())
    }

    fn clip(&self) -> Rect {
        self.clip_stack.last().copied().unwrap_or_else(|| self.area())
    }

    /// Restrict drawing to `rect` (intersected with the current clip).
    pub fn push_clip(&mut self, rect: Rect) {
        let clipped = self.clip().intersect(rect);
        self.clip_stack.push(clipped);
    }

    pub fn pop_clip(&mut self) {
        if self.clip_stack.len() > 1 {
            self.clip_stack.pop();
        }
    }

    pub fn fill(&mut self, rect: Rect, style: Style) {
        let r = self.clip().intersect(rect);
        self.buffer.fill(r.x, r.y, r.width, r.height, style);
    }

    /// Draw `text` starting at `(x, y)`. Returns the column after the last
    /// grapheme drawn.
    pub fn text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let clip = self.clip();
        if y < clip.y || y >= clip.bottom() {
            return x;
        }
        let mut cx = x;
        for grapheme in text.graphemes(true) {
            let w = text_width(grapheme).max(1);
            if cx.saturating_add(w) > clip.right() {
                break;
            }
            if cx >= clip.x {
                self.buffer.put(cx, y, grapheme, style);
            }
            cx = cx.saturating_add(w);
        }
        cx
    }

    /// Draw `text` so that it ends at column `right` (exclusive).
    pub fn text_right(&mut self, right: u16, y: u16, text: &str, style: Style) -> u16 {
        let x = right.saturating_sub(text_width(text));
        self.text(x, y, text, style);
        x
    }

    /// Draw `text` centred within `rect` on row `y`.
    pub fn text_centered(&mut self, rect: Rect, y: u16, text: &str, style: Style) {
        let w = text_width(text).min(rect.width);
        let x = rect.x + (rect.width - w) / 2;
        self.text(x, y, text, style);
    }

    pub fn hline(&mut self, x: u16, y: u16, width: u16, glyph: &str, style: Style) {
        for cx in x..x.saturating_add(width) {
            self.text(cx, y, glyph, style);
        }
    }

    pub fn vline(&mut self, x: u16, y: u16, height: u16, glyph: &str, style: Style) {
        for cy in y..y.saturating_add(height) {
            self.text(x, cy, glyph, style);
        }
    }

    /// Outline `rect` and optionally place a title in the top edge.
    pub fn border(
        &mut self,
        rect: Rect,
        glyphs: BorderGlyphs,
        style: Style,
        title: Option<(&str, Style)>,
    ) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
        self.hline(rect.x + 1, rect.y, rect.width - 2, glyphs.horizontal, style);
        self.hline(rect.x + 1, bottom, rect.width - 2, glyphs.horizontal, style);
        self.vline(rect.x, rect.y + 1, rect.height - 2, glyphs.vertical, style);
        self.vline(right, rect.y + 1, rect.height - 2, glyphs.vertical, style);
        self.text(rect.x, rect.y, glyphs.top_left, style);
        self.text(right, rect.y, glyphs.top_right, style);
        self.text(rect.x, bottom, glyphs.bottom_left, style);
        self.text(right, bottom, glyphs.bottom_right, style);

        if let Some((title, title_style)) = title {
            let room = rect.width.saturating_sub(4);
            if room > 0 {
                let label = truncate(title, room);
                self.text(rect.x + 2, rect.y, &label, title_style);
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_wrap_fits_and_keeps_words(text in "[a-z ]{0,120}", width in 1u16..40) {
            let lines = wrap(&text, width);
            for line in &lines {
                prop_assert!(text_width(line) <= width, "{line:?} wider than {width}");
            }
            let joined: String = lines.concat().split_whitespace().collect();
            let original: String = text.split_whitespace().collect();
            prop_assert_eq!(joined, original);
        }

        #[test]
        fn prop_truncate_never_exceeds_width(text in "[a-zA-Z0-9 一-龥]{0,60}", width in 0u16..30) {
            let out = truncate(&text, width);
            prop_assert!(text_width(&out) <= width);
            if text_width(&text) <= width {
                prop_assert_eq!(out, text);
            }
        }
    }
}
