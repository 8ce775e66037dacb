//! Key normalisation
//!
//! Screens never see crossterm events directly. `Key::from_event` reduces a
//! `KeyEvent` to the handful of keys the portfolio reacts to; anything it
//! cannot use comes back as `None` (release events) or `Key::Other` and is
//! ignored downstream.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character with no Ctrl/Alt modifier.
    Char(char),
    Enter,
    /// Backspace or Delete. Both remove from the end of a buffer.
    Backspace,
    Up,
    Down,
    Esc,
    /// Ctrl+C.
    Interrupt,
    Other,
}

impl Key {
    pub fn from_event(event: KeyEvent) -> Option<Key> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        // AltGr arrives as Ctrl+Alt on Windows and produces ordinary text
        let altgr = event
            .modifiers
            .contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let modified = !altgr
            && event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        let key = match event.code {
            KeyCode::Char(c) if modified => {
                if event.modifiers.contains(KeyModifiers::CONTROL) && c.eq_ignore_ascii_case(&'c')
                {
                    Key::Interrupt
                } else {
                    Key::Other
                }
            }
            KeyCode::Char(c) if !c.is_control() => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace | KeyCode::Delete => Key::Backspace,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Esc => Key::Esc,
            _ => Key::Other,
        };
        Some(key)
    }

    /// Esc or Ctrl+C.
    pub fn is_interrupt(self) -> bool {
        matches!(self, Key::Esc | Key::Interrupt)
    }
}
