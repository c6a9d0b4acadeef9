//! The VEL palette.

use vel_core::LogCategory;

use crate::color::Color;
use crate::direct::{Modifiers, Style};

/// Colors used by every panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Headings, prompt, cursor, active navigation.
    pub accent: Color,
    /// Fragment counter and status line.
    pub green: Color,
    /// Archive counter.
    pub amber: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    /// Inner console frame.
    pub frame: Color,
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::rgb(0xff, 0x2d, 0x2d),
            green: Color::rgb(0x00, 0xff, 0x88),
            amber: Color::rgb(0xff, 0xaa, 0x00),
            text: Color::rgb(0xcc, 0xcc, 0xcc),
            dim: Color::rgb(0x66, 0x66, 0x66),
            border: Color::rgb(0x44, 0x44, 0x44),
            frame: Color::rgb(0x33, 0x33, 0x33),
            background: Color::TRANSPARENT,
        }
    }
}

impl Theme {
    /// Tag color for a console line.
    pub const fn category(&self, category: LogCategory) -> Color {
        match category {
            LogCategory::System => self.accent,
            LogCategory::Memory => self.green,
            LogCategory::Analysis => self.amber,
            LogCategory::Introspection => Color::rgb(0x88, 0x88, 0xff),
            LogCategory::Error => Color::rgb(0xff, 0x44, 0x44),
            LogCategory::Recovery => Color::rgb(0x00, 0xdd, 0xff),
            LogCategory::Scan => Color::rgb(0xff, 0xcc, 0x00),
        }
    }

    /// `color` faded almost to black, for tinted chips and the active
    /// navigation row.
    pub fn tint(&self, color: Color) -> Color {
        Color::BLACK.lerp(color, 0.12)
    }

    pub const fn plain(&self) -> Style {
        Style::fg(self.text).on(self.background)
    }

    pub const fn muted(&self) -> Style {
        Style::fg(self.dim).on(self.background)
    }

    pub const fn heading(&self) -> Style {
        Style::fg(self.accent).on(self.background).bold()
    }

    pub const fn outline(&self) -> Style {
        Style::fg(self.border).on(self.background)
    }

    pub const fn tag(&self, category: LogCategory) -> Style {
        Style::fg(self.category(category))
            .on(self.background)
            .with(Modifiers::BOLD)
    }
}
