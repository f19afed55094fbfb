//! Abstract input key event, independent of terminal library.
//!
//! Keeps mealdeck-app free of crossterm types so the headless runner and tests
//! can drive the same key handlers the TUI uses.

/// Abstract input key event, converted from crossterm at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Digit value of a `Char('0'..='9')` key
    pub fn digit(&self) -> Option<usize> {
        match self {
            InputKey::Char(c) => c.to_digit(10).map(|d| d as usize),
            _ => None,
        }
    }
}
