//! Abstract input key event, independent of terminal library.
//!
//! Converted from `crossterm::event::KeyEvent` at the TUI boundary so this
//! crate never depends on terminal-specific types.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+s, Ctrl+c, etc.)
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
    BackTab,
    Backspace,
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_and_plain_chars_are_distinct() {
        assert_eq!(InputKey::Char('s'), InputKey::Char('s'));
        assert_ne!(InputKey::CharCtrl('s'), InputKey::Char('s'));
    }
}
