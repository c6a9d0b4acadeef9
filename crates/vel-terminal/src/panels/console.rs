//! Live console: status chips, counter cards and the scrolling log.

use vel_core::content::{ARCHIVES_LABEL, CONSOLE_HEADING, CURSOR_GLYPH, FRAGMENTS_LABEL, PROMPT};
use vel_core::LogEntry;

use crate::canvas::{text_width, truncate, wrap, BorderGlyphs, Painter, Rect};
use crate::color::Color;
use crate::direct::Style;
use crate::theme::Theme;

use super::Frame;

/// Cards are dropped below this content height.
const CARDS_MIN_HEIGHT: u16 = 14;
const CARD_HEIGHT: u16 = 4;
/// Narrowest message column before messages move under their prefix.
const MIN_MESSAGE_WIDTH: u16 = 12;

/// One rendered line of the log: styled spans laid left to right.
pub type Row = Vec<(String, Style)>;

pub fn draw(painter: &mut Painter<'_>, area: Rect, frame: &Frame<'_>, theme: &Theme) {
    let (header, rest) = area.split_top(2);
    draw_header(painter, header, frame, theme);

    let rest = if area.height >= CARDS_MIN_HEIGHT {
        let (cards, rest) = rest.split_top(CARD_HEIGHT + 1);
        draw_cards(painter, cards, frame, theme);
        rest
    } else {
        rest
    };

    painter.border(rest, BorderGlyphs::SINGLE, Style::fg(theme.frame).on(theme.background), None);
    let inner = rest.inset(1).pad_x(1);
    let rows = visible_rows(frame, inner.width, inner.height, theme);
    for (i, row) in rows.iter().enumerate() {
        let y = inner.y + i as u16;
        let mut x = inner.x;
        for (text, style) in row {
            x = painter.text(x, y, text, *style);
        }
    }

    if frame.scroll > 0 && rest.width > 4 {
        let marker = format!(" ↓ {} newer ", frame.scroll);
        painter.text(rest.x + 2, rest.bottom().saturating_sub(1), &marker, theme.muted());
    }
}

fn draw_header(painter: &mut Painter<'_>, area: Rect, frame: &Frame<'_>, theme: &Theme) {
    painter.text(area.x, area.y, CONSOLE_HEADING, theme.heading());

    let integrity = format!(" {} ", frame.stats.integrity_label());
    let threads = format!(" {} ", frame.stats.threads_label());
    let x = painter.text_right(area.right(), area.y, &integrity, chip(theme, theme.green));
    painter.text_right(x.saturating_sub(1), area.y, &threads, chip(theme, theme.dim));
}

fn chip(theme: &Theme, color: Color) -> Style {
    Style::fg(color).on(theme.tint(color))
}

fn draw_cards(painter: &mut Painter<'_>, area: Rect, frame: &Frame<'_>, theme: &Theme) {
    let half = area.width.saturating_sub(1) / 2;
    let left = Rect::new(area.x, area.y, half, CARD_HEIGHT);
    let right = Rect::new(area.right().saturating_sub(half), area.y, half, CARD_HEIGHT);
    let cards = [
        (left, FRAGMENTS_LABEL, frame.stats.fragments_label(), theme.green),
        (right, ARCHIVES_LABEL, frame.stats.archives_label(), theme.amber),
    ];
    for (rect, label, value, color) in cards {
        painter.border(rect, BorderGlyphs::SINGLE, theme.outline(), None);
        let inner = rect.inset(1).pad_x(1);
        painter.text(inner.x, inner.y, &truncate(label, inner.width), theme.muted());
        let value_style = Style::fg(color).on(theme.background).bold();
        painter.text(inner.x, inner.y + 1, &value, value_style);
    }
}

/// Rows for one entry wrapped to `width`: the timestamp and tag prefix,
/// then the message with continuation lines aligned under it.
pub fn entry_rows(entry: &LogEntry, width: u16, theme: &Theme) -> Vec<Row> {
    let stamp = format!("[{}] ", entry.timestamp);
    let tag = format!("[{}] ", entry.category.label());
    let prefix_width = text_width(&stamp) + text_width(&tag);
    let stamp_style = theme.muted();
    let tag_style = theme.tag(entry.category);
    let message_style = theme.plain();

    if width < prefix_width + MIN_MESSAGE_WIDTH {
        let mut rows = vec![vec![
            (truncate(&stamp, width), stamp_style),
            (tag, tag_style),
        ]];
        rows.extend(
            wrap(&entry.message, width)
                .into_iter()
                .map(|line| vec![(line, message_style)]),
        );
        return rows;
    }

    let indent = " ".repeat(usize::from(prefix_width));
    let mut lines = wrap(&entry.message, width - prefix_width).into_iter();
    let first = lines.next().unwrap_or_default();
    let mut rows = vec![vec![
        (stamp, stamp_style),
        (tag, tag_style),
        (first, message_style),
    ]];
    rows.extend(lines.map(|line| vec![(indent.clone(), message_style), (line, message_style)]));
    rows
}

fn prompt_row(visible: bool, theme: &Theme) -> Row {
    let cursor = if visible { CURSOR_GLYPH } else { " " };
    vec![
        (format!("{PROMPT} "), theme.heading()),
        (cursor.to_string(), Style::fg(theme.accent).on(theme.background)),
    ]
}

/// The last `height` rows of the log ending `frame.scroll` entries before
/// the tail. The prompt line follows the newest entry and is only present
/// while following the tail.
pub fn visible_rows(frame: &Frame<'_>, width: u16, height: u16, theme: &Theme) -> Vec<Row> {
    let height = usize::from(height);
    if height == 0 || width == 0 {
        return Vec::new();
    }
    let end = frame.entries.len().saturating_sub(frame.scroll);

    // Collected newest first, reversed at the end.
    let mut rows = Vec::with_capacity(height);
    if frame.scroll == 0 {
        rows.push(prompt_row(frame.view.cursor_visible(), theme));
    }
    for entry in frame.entries[..end].iter().rev() {
        if rows.len() >= height {
            break;
        }
        rows.extend(entry_rows(entry, width, theme).into_iter().rev());
    }
    rows.truncate(height);
    rows.reverse();
    rows
}
