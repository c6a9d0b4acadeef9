//! Identity, navigation, social link and status footer.

use vel_core::content::{IDENTITY, SOCIAL_LABEL, STATUS_LINE, SUBTITLE, UPTIME_LINE};
use vel_core::Section;

use crate::canvas::{truncate, Painter, Rect};
use crate::direct::Style;
use crate::layout::Layout;
use crate::theme::Theme;

use super::Frame;

const ACTIVE_MARKER: &str = "▌";

pub fn draw(painter: &mut Painter<'_>, layout: &Layout, frame: &Frame<'_>, theme: &Theme) {
    let area = layout.sidebar;
    let edge = area.right().saturating_sub(1);
    painter.vline(edge, area.y, area.height, "│", theme.outline());

    let body = Rect::new(area.x + 2, area.y, area.width.saturating_sub(4), area.height);
    painter.text(body.x, 1, IDENTITY, theme.heading());
    painter.text(body.x, 2, &truncate(SUBTITLE, body.width), theme.muted());
    painter.hline(area.x, 3, edge.saturating_sub(area.x), "─", theme.outline());

    for section in Section::ALL {
        draw_nav_item(
            painter,
            layout.nav_rect(section),
            section,
            section == frame.view.active(),
            theme,
        );
    }

    let social = layout.social;
    if social.height >= 2 {
        painter.text(body.x, social.y, SOCIAL_LABEL, theme.plain().bold());
        let url = truncate(frame.social_url, body.width);
        painter.text(body.x, social.y + 1, &url, theme.muted());
    }

    // Footer, kept clear of the social link.
    let status_y = area.bottom().saturating_sub(3);
    if status_y > social.bottom() {
        painter.hline(area.x, status_y - 1, edge.saturating_sub(area.x), "─", theme.outline());
        painter.text(body.x, status_y, STATUS_LINE, Style::fg(theme.green).on(theme.background));
        painter.text(body.x, status_y + 1, UPTIME_LINE, theme.muted());
    }
}

fn draw_nav_item(
    painter: &mut Painter<'_>,
    rect: Rect,
    section: Section,
    active: bool,
    theme: &Theme,
) {
    if rect.is_empty() {
        return;
    }
    if active {
        let style = Style::fg(theme.accent).on(theme.tint(theme.accent)).bold();
        painter.fill(rect, style);
        painter.text(rect.x, rect.y, ACTIVE_MARKER, style);
        painter.text(rect.x + 2, rect.y, section.title(), style);
    } else {
        painter.text(rect.x + 2, rect.y, section.title(), theme.plain());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::CellBuffer;
    use vel_core::{StatsSnapshot, ViewState};

    fn render(section: Section, width: u16, height: u16) -> (CellBuffer, Layout) {
        let frame = Frame {
            entries: &[],
            stats: StatsSnapshot::INITIAL,
            view: ViewState::new(section),
            faq_focus: 0,
            scroll: 0,
            social_url: "https://twitter.com/vel",
        };
        let mut buffer = CellBuffer::new(width, height);
        let layout = Layout::new(width, height);
        draw(&mut Painter::new(&mut buffer), &layout, &frame, &Theme::default());
        (buffer, layout)
    }

    #[test]
    fn test_identity_and_footer() {
        let (buffer, _) = render(Section::Console, 100, 30);
        let text = buffer.to_plain_text();
        assert!(buffer.row_text(1).contains("VEL"));
        assert!(text.contains("ARCHIVAL INTELLIGENCE"));
        assert!(text.contains("TWITTER"));
        assert!(text.contains("https://twitter.com/vel"));
        assert!(text.contains("STATUS: ACTIVE"));
        assert!(text.contains("UPTIME: ∞"));
    }

    #[test]
    fn test_only_active_item_is_highlighted() {
        let theme = Theme::default();
        let (buffer, layout) = render(Section::Faq, 100, 30);
        let tint = theme.tint(theme.accent);
        for section in Section::ALL {
            let rect = layout.nav_rect(section);
            let cell = buffer.get(rect.x + 2, rect.y).unwrap();
            assert_eq!(cell.style.bg == tint, section == Section::Faq, "{section}");
        }
        let faq = layout.nav_rect(Section::Faq);
        assert_eq!(buffer.get(faq.x, faq.y).unwrap().symbol.as_str(), ACTIVE_MARKER);
    }

    #[test]
    fn test_footer_dropped_when_short() {
        let (buffer, _) = render(Section::Console, 100, 14);
        assert!(!buffer.to_plain_text().contains("STATUS: ACTIVE"));
    }
}
