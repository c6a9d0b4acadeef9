//! Screen geometry shared by drawing and mouse hit-testing.

use vel_core::Section;

use crate::canvas::Rect;

/// Sidebar width on terminals at least [`WIDE_THRESHOLD`] columns wide.
pub const SIDEBAR_WIDTH: u16 = 26;
const WIDE_THRESHOLD: u16 = 72;
const NARROW_SIDEBAR_MIN: u16 = 16;

/// Smallest terminal the full layout is drawn for.
pub const MIN_WIDTH: u16 = 48;
pub const MIN_HEIGHT: u16 = 16;

/// First navigation row; items are two rows apart.
const NAV_TOP: u16 = 5;

/// Regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub area: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    /// Panel body inside `main`.
    pub content: Rect,
    /// Key hint row at the bottom of `main`.
    pub hint: Rect,
    /// Navigation rows, indexed by [`Section::index`].
    pub nav: [Rect; 3],
    pub social: Rect,
}

impl Layout {
    pub fn new(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        let sidebar_width = if width >= WIDE_THRESHOLD {
            SIDEBAR_WIDTH
        } else {
            (width / 3).max(NARROW_SIDEBAR_MIN).min(width)
        };
        let (sidebar, main) = area.split_left(sidebar_width);

        // Right column of the sidebar is its border.
        let inner_width = sidebar.width.saturating_sub(2);
        let nav = Section::ALL.map(|section| {
            let row = NAV_TOP + 2 * section.index() as u16;
            Rect::new(sidebar.x, row, inner_width, 1).intersect(sidebar)
        });
        let social_top = NAV_TOP + 2 * Section::ALL.len() as u16;
        let social = Rect::new(sidebar.x, social_top, inner_width, 2).intersect(sidebar);

        let body = main.pad_x(2);
        let content = Rect::new(
            body.x,
            body.y.saturating_add(1),
            body.width,
            body.height.saturating_sub(3),
        );
        let hint = Rect::new(body.x, main.bottom().saturating_sub(1), body.width, 1).intersect(main);

        Self {
            area,
            sidebar,
            main,
            content,
            hint,
            nav,
            social,
        }
    }

    /// Whether the terminal is large enough for the full layout.
    pub const fn fits(&self) -> bool {
        self.area.width >= MIN_WIDTH && self.area.height >= MIN_HEIGHT
    }

    pub const fn nav_rect(&self, section: Section) -> Rect {
        self.nav[section.index()]
    }

    /// Navigation item under `(x, y)`.
    pub fn section_at(&self, x: u16, y: u16) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| self.nav_rect(*section).contains(x, y))
    }
}
