//! Key bindings and mouse handling for the console.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};
use vel_core::Section;

/// What the user asked for. Context-sensitive actions (`Up`, `Activate`,
/// ...) are interpreted by the app according to the active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Select(Section),
    NextSection,
    PrevSection,
    Up,
    Down,
    PageUp,
    PageDown,
    End,
    Activate,
    /// Left click at a cell.
    Click { x: u16, y: u16 },
}

/// Key binding configuration.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub code: KeyCode,
    /// Required modifiers. Shift is ignored when matching.
    pub modifiers: KeyModifiers,
    pub action: Action,
}

impl KeyBinding {
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers, action: Action) -> Self {
        Self {
            code,
            modifiers,
            action,
        }
    }

    /// Binding without modifiers.
    #[must_use]
    pub const fn simple(code: KeyCode, action: Action) -> Self {
        Self::new(code, KeyModifiers::NONE, action)
    }

    /// Check if this binding matches a key event.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.code == self.code
            && event.modifiers.difference(KeyModifiers::SHIFT)
                == self.modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Maps terminal events to [`Action`]s.
#[derive(Debug)]
pub struct InputHandler {
    bindings: Vec<KeyBinding>,
}

impl Default for InputHandler {
    fn default() -> Self {
        use Action::{Activate, Down, End, NextSection, PageDown, PageUp, PrevSection, Quit, Up};
        use KeyCode::{BackTab, Char, Enter, Esc, Left, Right, Tab};

        let bindings = vec![
            KeyBinding::new(Char('c'), KeyModifiers::CONTROL, Quit),
            KeyBinding::simple(Char('q'), Quit),
            KeyBinding::simple(Esc, Quit),
            KeyBinding::simple(Char('1'), Action::Select(Section::Mission)),
            KeyBinding::simple(Char('m'), Action::Select(Section::Mission)),
            KeyBinding::simple(Char('2'), Action::Select(Section::Console)),
            KeyBinding::simple(Char('c'), Action::Select(Section::Console)),
            KeyBinding::simple(Char('3'), Action::Select(Section::Faq)),
            KeyBinding::simple(Char('f'), Action::Select(Section::Faq)),
            KeyBinding::simple(Tab, NextSection),
            KeyBinding::simple(Right, NextSection),
            KeyBinding::simple(BackTab, PrevSection),
            KeyBinding::simple(Left, PrevSection),
            KeyBinding::simple(KeyCode::Up, Up),
            KeyBinding::simple(Char('k'), Up),
            KeyBinding::simple(KeyCode::Down, Down),
            KeyBinding::simple(Char('j'), Down),
            KeyBinding::simple(KeyCode::PageUp, PageUp),
            KeyBinding::simple(KeyCode::PageDown, PageDown),
            KeyBinding::simple(KeyCode::End, End),
            KeyBinding::simple(Enter, Activate),
            KeyBinding::simple(Char(' '), Activate),
        ];
        Self { bindings }
    }
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler with no bindings.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a key binding. Earlier bindings win.
    pub fn add_binding(&mut self, binding: KeyBinding) {
        self.bindings.push(binding);
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    #[must_use]
    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.bindings
            .iter()
            .find(|binding| binding.matches(key))
            .map(|binding| binding.action)
    }

    /// Convert a crossterm event. Only left-button presses produce mouse
    /// actions; resize and focus events are handled by the run loop.
    #[must_use]
    pub fn convert(&self, event: &CrosstermEvent) -> Option<Action> {
        match event {
            CrosstermEvent::Key(key) => self.action_for_key(key),
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
                    x: mouse.column,
                    y: mouse.row,
                }),
                MouseEventKind::ScrollUp => Some(Action::Up),
                MouseEventKind::ScrollDown => Some(Action::Down),
                _ => None,
            },
            _ => None,
        }
    }
}
