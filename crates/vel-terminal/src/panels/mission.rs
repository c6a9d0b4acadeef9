//! Mission directive and operational parameters.

use vel_core::content::{MISSION_DIRECTIVE, MISSION_HEADING, OPERATIONAL_PARAMETERS, PARAMETERS_HEADING};

use crate::canvas::{wrap, BorderGlyphs, Painter, Rect};
use crate::theme::Theme;

pub fn draw(painter: &mut Painter<'_>, area: Rect, theme: &Theme) {
    painter.text(area.x, area.y, MISSION_HEADING, theme.heading());

    let mut y = area.y + 2;
    for paragraph in MISSION_DIRECTIVE {
        for line in wrap(paragraph, area.width) {
            painter.text(area.x, y, &line, theme.plain());
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);
    }

    let rows = OPERATIONAL_PARAMETERS.len() as u16;
    let panel = Rect::new(area.x, y, area.width, rows + 4);
    painter.border(panel, BorderGlyphs::SINGLE, theme.outline(), None);
    let inner = panel.inset(1).pad_x(1);
    painter.text(inner.x, inner.y, PARAMETERS_HEADING, theme.heading());
    for (i, (label, value)) in OPERATIONAL_PARAMETERS.iter().enumerate() {
        let row = inner.y + 1 + i as u16;
        let x = painter.text(inner.x, row, &format!("{label}: "), theme.muted());
        painter.text(x, row, value, theme.plain());
    }
}
