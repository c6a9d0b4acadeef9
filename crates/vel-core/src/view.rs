//! View-state controller.
//!
//! Transitions follow the Elm pattern: a [`ViewMessage`] applied through
//! [`ViewState::update`]. The direct methods (`select_section`, `toggle_faq`,
//! `cursor_blink`) are the same transitions without the message wrapper.
//!
//! ```
//! use vel_core::{Section, ViewMessage, ViewState};
//!
//! let mut view = ViewState::default();
//! view.update(ViewMessage::SelectSection(Section::Faq));
//! view.update(ViewMessage::ToggleFaq(3));
//! assert_eq!(view.expanded_faq(), Some(3));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Mission,
    #[default]
    Console,
    Faq,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Self; 3] = [Self::Mission, Self::Console, Self::Faq];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mission => "mission",
            Self::Console => "console",
            Self::Faq => "faq",
        }
    }

    /// Sidebar label.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Mission => "MISSION",
            Self::Console => "CONSOLE",
            Self::Faq => "FAQ",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Mission => 0,
            Self::Console => 1,
            Self::Faq => 2,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Mission => Self::Console,
            Self::Console => Self::Faq,
            Self::Faq => Self::Mission,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Mission => Self::Faq,
            Self::Console => Self::Mission,
            Self::Faq => Self::Console,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown section name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}` (expected mission, console or faq)")]
pub struct ParseSectionError(pub String);

impl FromStr for Section {
    type Err = ParseSectionError;

    /// Accepts the lowercase name in any case, or the 1-based position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mission" | "1" => Ok(Self::Mission),
            "console" | "2" => Ok(Self::Console),
            "faq" | "3" => Ok(Self::Faq),
            _ => Err(ParseSectionError(s.to_string())),
        }
    }
}

/// View transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMessage {
    SelectSection(Section),
    NextSection,
    PrevSection,
    ToggleFaq(u32),
    CursorBlink,
}

/// Which panel is shown, which FAQ entry is open, and the cursor phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    active: Section,
    expanded_faq: Option<u32>,
    cursor_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Section::default())
    }
}

impl ViewState {
    pub const fn new(active: Section) -> Self {
        Self {
            active,
            expanded_faq: None,
            cursor_visible: true,
        }
    }

    pub const fn active(&self) -> Section {
        self.active
    }

    pub const fn expanded_faq(&self) -> Option<u32> {
        self.expanded_faq
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded_faq == Some(id)
    }

    pub const fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn select_section(&mut self, section: Section) {
        self.active = section;
    }

    /// Collapse `id` if it is open, otherwise open it and close any other.
    pub fn toggle_faq(&mut self, id: u32) {
        self.expanded_faq = if self.expanded_faq == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn cursor_blink(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    pub fn update(&mut self, msg: ViewMessage) {
        match msg {
            ViewMessage::SelectSection(section) => self.select_section(section),
            ViewMessage::NextSection => self.select_section(self.active.next()),
            ViewMessage::PrevSection => self.select_section(self.active.prev()),
            ViewMessage::ToggleFaq(id) => self.toggle_faq(id),
            ViewMessage::CursorBlink => self.cursor_blink(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let view = ViewState::default();
        assert_eq!(view.active(), Section::Console);
        assert_eq!(view.expanded_faq(), None);
        assert!(view.cursor_visible());
    }

    #[test]
    fn test_select_section_idempotent() {
        let mut view = ViewState::default();
        view.select_section(Section::Faq);
        let once = view;
        view.select_section(Section::Faq);
        assert_eq!(view, once);
    }

    #[test]
    fn test_toggle_faq_twice_collapses() {
        let mut view = ViewState::default();
        view.toggle_faq(4);
        assert_eq!(view.expanded_faq(), Some(4));
        view.toggle_faq(4);
        assert_eq!(view.expanded_faq(), None);
    }

    #[test]
    fn test_toggle_other_faq_switches() {
        let mut view = ViewState::default();
        view.toggle_faq(1);
        view.toggle_faq(9);
        assert_eq!(view.expanded_faq(), Some(9));
        assert!(!view.is_expanded(1));
    }

    #[test]
    fn test_cursor_blink_touches_nothing_else() {
        let mut view = ViewState::new(Section::Mission);
        view.toggle_faq(2);
        view.cursor_blink();
        assert!(!view.cursor_visible());
        assert_eq!(view.active(), Section::Mission);
        assert_eq!(view.expanded_faq(), Some(2));
        view.cursor_blink();
        assert!(view.cursor_visible());
    }

    #[test]
    fn test_section_cycle() {
        for section in Section::ALL {
            assert_eq!(section.next().prev(), section);
            assert_eq!(section.next().next().next(), section);
        }
        assert_eq!(Section::Faq.next(), Section::Mission);
    }

    #[test]
    fn test_update_messages() {
        let mut view = ViewState::default();
        view.update(ViewMessage::NextSection);
        assert_eq!(view.active(), Section::Faq);
        view.update(ViewMessage::PrevSection);
        view.update(ViewMessage::PrevSection);
        assert_eq!(view.active(), Section::Mission);
        view.update(ViewMessage::ToggleFaq(12));
        assert!(view.is_expanded(12));
        view.update(ViewMessage::CursorBlink);
        assert!(!view.cursor_visible());
    }

    #[test]
    fn test_parse_section() {
        assert_eq!("FAQ".parse::<Section>(), Ok(Section::Faq));
        assert_eq!(" mission ".parse::<Section>(), Ok(Section::Mission));
        assert_eq!("2".parse::<Section>(), Ok(Section::Console));
        let err = "archive".parse::<Section>().unwrap_err();
        assert!(err.to_string().contains("archive"));
    }

    #[test]
    fn test_section_display_roundtrip() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>(), Ok(section));
            assert_eq!(Section::ALL[section.index()], section);
        }
    }
}
