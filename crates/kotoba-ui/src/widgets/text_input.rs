use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};

use crate::keys::typed_char;
use crate::theme;

/// Single line text field with a character limit
#[derive(Debug, Clone)]
pub struct TextInput {
    value: Vec<char>,
    cursor: usize,
    char_limit: usize,
    placeholder: &'static str,
    prompt: &'static str,
    focused: bool,
    blink: bool,
}

impl TextInput {
    pub fn new(char_limit: usize) -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            char_limit,
            placeholder: "",
            prompt: "> ",
            focused: false,
            blink: true,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.value.iter().all(|c| c.is_whitespace())
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.blink = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
        self.cursor = self.value.len();
    }

    pub fn tick(&mut self) {
        if self.focused {
            self.blink = !self.blink;
        }
    }

    /// Apply an editing key, returns whether the key was used
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !self.focused {
            return false;
        }

        if let Some(c) = typed_char(key) {
            if self.value.len() < self.char_limit {
                self.value.insert(self.cursor, c);
                self.cursor += 1;
            }
            self.blink = true;
            return true;
        }

        if key.modifiers != KeyModifiers::NONE {
            return false;
        }

        match key.code {
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.value.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.value.len() => {
                self.value.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.len(),
            KeyCode::Backspace | KeyCode::Delete => {}
            _ => return false,
        }
        self.blink = true;
        true
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(self.prompt, theme::ACCENT)];

        if self.value.is_empty() && !self.placeholder.is_empty() {
            let mut chars = self.placeholder.chars();
            let first = chars.next().map(String::from).unwrap_or_default();
            let first = if self.focused && self.blink {
                Span::styled(first, theme::CURSOR.patch(theme::MUTED))
            } else {
                Span::styled(first, theme::MUTED)
            };
            spans.push(first);
            spans.push(Span::styled(chars.collect::<String>(), theme::MUTED));
        } else {
            spans.extend(super::cursor_spans(
                &self.value,
                self.cursor,
                self.focused && self.blink,
            ));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.handle_key(&press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn respects_char_limit() {
        let mut input = TextInput::new(3);
        input.focus();
        typed(&mut input, "rainy");
        assert_eq!(input.value(), "rai");
    }

    #[test]
    fn edits_in_the_middle() {
        let mut input = TextInput::new(60);
        input.focus();
        typed(&mut input, "rin");
        input.handle_key(&press(KeyCode::Left));
        input.handle_key(&press(KeyCode::Left));
        typed(&mut input, "a");
        assert_eq!(input.value(), "rain");

        input.handle_key(&press(KeyCode::Home));
        input.handle_key(&press(KeyCode::Delete));
        assert_eq!(input.value(), "ain");

        input.handle_key(&press(KeyCode::End));
        input.handle_key(&press(KeyCode::Backspace));
        assert_eq!(input.value(), "ai");
    }

    #[test]
    fn ignores_keys_while_blurred() {
        let mut input = TextInput::new(10);
        assert!(!input.handle_key(&press(KeyCode::Char('a'))));
        assert!(input.value().is_empty());
    }

    #[test]
    fn control_chords_are_not_typed() {
        let mut input = TextInput::new(10);
        input.focus();
        let used = input.handle_key(&KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert!(!used);
        assert!(input.value().is_empty());
    }

    #[test]
    fn blank_value_counts_as_empty() {
        let mut input = TextInput::new(10);
        input.set_value("   ");
        assert!(input.is_empty());
    }
}
