//! Frame composition: sidebar plus the active section.

pub mod console;
pub mod faq;
pub mod mission;
pub mod sidebar;

use vel_core::{LogEntry, Section, StatsSnapshot, ViewState};

use crate::canvas::Painter;
use crate::direct::CellBuffer;
use crate::layout::{Layout, MIN_HEIGHT, MIN_WIDTH};
use crate::theme::Theme;

/// Everything a frame shows, borrowed from the app for one draw.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub entries: &'a [LogEntry],
    pub stats: StatsSnapshot,
    pub view: ViewState,
    /// Index into the FAQ catalogue of the focused question.
    pub faq_focus: usize,
    /// Entries hidden below the console viewport; 0 follows the live tail.
    pub scroll: usize,
    pub social_url: &'a str,
}

/// Redraw the whole buffer. Returns the layout used so input can be
/// hit-tested against the same geometry.
pub fn draw(frame: &Frame<'_>, theme: &Theme, buffer: &mut CellBuffer) -> Layout {
    buffer.clear(theme.plain());
    let layout = Layout::new(buffer.width(), buffer.height());
    let mut painter = Painter::new(buffer);

    if !layout.fits() {
        let message = format!("TERMINAL TOO SMALL ({MIN_WIDTH}x{MIN_HEIGHT})");
        let y = layout.area.height / 2;
        painter.text_centered(layout.area, y, &message, theme.heading());
        return layout;
    }

    sidebar::draw(&mut painter, &layout, frame, theme);
    painter.push_clip(layout.content);
    match frame.view.active() {
        Section::Mission => mission::draw(&mut painter, layout.content, theme),
        Section::Console => console::draw(&mut painter, layout.content, frame, theme),
        Section::Faq => faq::draw(&mut painter, layout.content, frame, theme),
    }
    painter.pop_clip();
    draw_hint(&mut painter, &layout, frame.view.active(), theme);
    layout
}

fn draw_hint(painter: &mut Painter<'_>, layout: &Layout, section: Section, theme: &Theme) {
    let local = match section {
        Section::Mission => "",
        Section::Console => "PGUP/PGDN SCROLL  END LIVE  ",
        Section::Faq => "↑↓ SELECT  ENTER TOGGLE  ",
    };
    let hint = format!("{local}1-3 SECTION  TAB NEXT  Q QUIT");
    painter.push_clip(layout.hint);
    painter.text(layout.hint.x, layout.hint.y, &hint, theme.muted());
    painter.pop_clip();
}
