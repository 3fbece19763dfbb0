use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(KeyModifiers::SHIFT, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

pub struct Keymap;

impl Keymap {
    // global
    pub const INTERRUPT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // navigation between screens, ctrl+q always goes one level up
    pub const TO_SEARCH: KeyBinding = KeyBinding::ctrl(KeyCode::Char('s'));
    pub const BACK: KeyBinding = KeyBinding::ctrl(KeyCode::Char('q'));

    // actions
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    // opens the translator from search, submits the text inside it
    pub const TRANSLATE: KeyBinding = KeyBinding::ctrl(KeyCode::Char('t'));
    pub const FILTER: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const ERASE: KeyBinding = KeyBinding::key(KeyCode::Backspace);

    // lists and viewers
    pub const UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const UP_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
    pub const DOWN_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('j'));
    pub const PAGE_UP: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const PAGE_DOWN: KeyBinding = KeyBinding::key(KeyCode::PageDown);

    // translator language selector
    pub const LANGUAGE_PREV: KeyBinding = KeyBinding::shift(KeyCode::Left);
    pub const LANGUAGE_NEXT: KeyBinding = KeyBinding::shift(KeyCode::Right);

    pub fn is_quit(key: &KeyEvent) -> bool {
        Self::INTERRUPT.matches(key) || Self::QUIT.matches(key)
    }

    pub fn is_up(key: &KeyEvent) -> bool {
        Self::UP.matches(key) || Self::UP_VIM.matches(key)
    }

    pub fn is_down(key: &KeyEvent) -> bool {
        Self::DOWN.matches(key) || Self::DOWN_VIM.matches(key)
    }
}

/// Printable character carried by `key`, if it is plain or shifted typing
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(c)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_and_esc_quit() {
        assert!(Keymap::is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(Keymap::is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!Keymap::is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn shifted_letters_are_typed() {
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(typed_char(&key), Some('A'));

        let key = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(typed_char(&key), None);
    }
}
