//! Input event types and key binding matching.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            shift: mods.contains(KeyModifiers::SHIFT),
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers::from(event.modifiers),
        }
    }
}

impl InputEvent {
    /// Check if this matches a key binding string (e.g., "Ctrl+r", "Enter", "?").
    ///
    /// Character bindings ignore Shift, since the character already reflects
    /// it (`?` arrives as Shift+/ on most layouts).
    pub fn matches(&self, binding: &str) -> bool {
        let mut expected = Modifiers::default();
        let mut expected_key = "";

        for part in binding.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" => expected.ctrl = true,
                "alt" => expected.alt = true,
                "shift" => expected.shift = true,
                _ => expected_key = part,
            }
        }

        let is_char_binding = expected_key.chars().count() == 1;
        if self.modifiers.ctrl != expected.ctrl
            || self.modifiers.alt != expected.alt
            || (!is_char_binding && self.modifiers.shift != expected.shift)
        {
            return false;
        }

        if is_char_binding {
            return expected_key
                .chars()
                .next()
                .is_some_and(|c| self.key == Key::Char(c));
        }

        match expected_key.to_lowercase().as_str() {
            "enter" => self.key == Key::Enter,
            "esc" | "escape" => self.key == Key::Escape,
            "backspace" => self.key == Key::Backspace,
            "delete" | "del" => self.key == Key::Delete,
            "tab" => self.key == Key::Tab,
            "up" => self.key == Key::Up,
            "down" => self.key == Key::Down,
            "home" => self.key == Key::Home,
            "end" => self.key == Key::End,
            "pageup" => self.key == Key::PageUp,
            "pagedown" => self.key == Key::PageDown,
            s if s.starts_with('f') => s[1..]
                .parse::<u8>()
                .is_ok_and(|n| self.key == Key::F(n)),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, mods: KeyModifiers) -> InputEvent {
        InputEvent::from(KeyEvent::new(code, mods))
    }

    #[test]
    fn test_char_binding() {
        assert!(press(KeyCode::Char('c'), KeyModifiers::NONE).matches("c"));
        assert!(!press(KeyCode::Char('C'), KeyModifiers::SHIFT).matches("c"));
        assert!(press(KeyCode::Char('?'), KeyModifiers::SHIFT).matches("?"));
    }

    #[test]
    fn test_modifier_binding() {
        assert!(press(KeyCode::Char('r'), KeyModifiers::CONTROL).matches("Ctrl+r"));
        assert!(!press(KeyCode::Char('r'), KeyModifiers::NONE).matches("Ctrl+r"));
        assert!(!press(KeyCode::Char('r'), KeyModifiers::CONTROL).matches("r"));
    }

    #[test]
    fn test_named_keys() {
        assert!(press(KeyCode::Enter, KeyModifiers::NONE).matches("Enter"));
        assert!(press(KeyCode::Esc, KeyModifiers::NONE).matches("esc"));
        assert!(press(KeyCode::F(5), KeyModifiers::NONE).matches("F5"));
        assert!(!press(KeyCode::F(5), KeyModifiers::NONE).matches("F6"));
        assert!(!press(KeyCode::Insert, KeyModifiers::NONE).matches("Enter"));
    }
}
