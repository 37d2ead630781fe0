//! Terminal-independent key events
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the handlers in this crate never see crossterm types.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character pressed with Ctrl
    CharCtrl(char),
    /// Character pressed with Alt
    CharAlt(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing and actions
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// True for keys that insert text into a focused input
    pub fn is_text(&self) -> bool {
        matches!(self, InputKey::Char(_))
    }
}
