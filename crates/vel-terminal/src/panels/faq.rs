//! Accordion of questions; at most one answer open.
//!
//! [`lines`] is the single source of row positions: drawing uses it and so
//! does mouse hit-testing, so a click always lands on what was drawn.

use vel_core::content::{FAQ, FAQ_HEADING};
use vel_core::ViewState;

use crate::canvas::{truncate, wrap, Painter, Rect};
use crate::direct::Style;
use crate::theme::Theme;

use super::Frame;

const OPEN_MARKER: &str = "▲";
const CLOSED_MARKER: &str = "▼";
const ANSWER_INDENT: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Question,
    Answer(String),
}

/// One visible row of the accordion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqLine {
    /// Position in the catalogue.
    pub index: usize,
    pub id: u32,
    pub y: u16,
    pub kind: LineKind,
}

/// Rows visible in `area`, scrolled so that the focused question and its
/// open answer stay on screen.
pub fn lines(area: Rect, view: &ViewState, focus: usize) -> Vec<FaqLine> {
    let list_top = area.y.saturating_add(2);
    let height = usize::from(area.height.saturating_sub(2));
    if height == 0 {
        return Vec::new();
    }
    let answer_width = area.width.saturating_sub(ANSWER_INDENT);

    // Every row of the unscrolled list; `None` marks spacing after an answer.
    let mut rows: Vec<Option<(usize, u32, LineKind)>> = Vec::new();
    let mut focus_start = 0;
    let mut focus_end = 0;
    for (index, entry) in FAQ.iter().enumerate() {
        if index == focus {
            focus_start = rows.len();
        }
        rows.push(Some((index, entry.id, LineKind::Question)));
        if view.is_expanded(entry.id) {
            for line in wrap(entry.answer, answer_width) {
                rows.push(Some((index, entry.id, LineKind::Answer(line))));
            }
            rows.push(None);
        }
        if index == focus {
            focus_end = rows.len() - 1;
        }
    }

    let offset = if focus_end >= height {
        (focus_end + 1 - height).min(focus_start)
    } else {
        0
    };

    rows.into_iter()
        .skip(offset)
        .take(height)
        .enumerate()
        .filter_map(|(i, row)| {
            row.map(|(index, id, kind)| FaqLine {
                index,
                id,
                y: list_top + i as u16,
                kind,
            })
        })
        .collect()
}

/// Catalogue index of the question drawn on row `y`.
pub fn question_at(area: Rect, view: &ViewState, focus: usize, x: u16, y: u16) -> Option<usize> {
    if x < area.x || x >= area.right() {
        return None;
    }
    lines(area, view, focus)
        .into_iter()
        .find(|line| line.y == y && line.kind == LineKind::Question)
        .map(|line| line.index)
}

pub fn draw(painter: &mut Painter<'_>, area: Rect, frame: &Frame<'_>, theme: &Theme) {
    painter.text(area.x, area.y, FAQ_HEADING, theme.heading());

    for line in lines(area, &frame.view, frame.faq_focus) {
        match line.kind {
            LineKind::Question => {
                let focused = line.index == frame.faq_focus;
                let style = if focused {
                    Style::fg(theme.accent).on(theme.tint(theme.accent)).bold()
                } else {
                    theme.plain()
                };
                let row = Rect::new(area.x, line.y, area.width, 1);
                if focused {
                    painter.fill(row, style);
                }
                let marker = if frame.view.is_expanded(line.id) {
                    OPEN_MARKER
                } else {
                    CLOSED_MARKER
                };
                let question = format!("> {}", FAQ[line.index].question);
                painter.text(area.x, line.y, &truncate(&question, area.width.saturating_sub(2)), style);
                painter.text_right(area.right(), line.y, marker, style);
            }
            LineKind::Answer(text) => {
                painter.text(area.x + ANSWER_INDENT, line.y, &text, theme.muted());
            }
        }
    }
}
