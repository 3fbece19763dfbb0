use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};

use crate::keys::typed_char;
use crate::theme;

/// Multi line text field. The limit counts characters across all lines,
/// line breaks included.
#[derive(Debug, Clone)]
pub struct TextArea {
    lines: Vec<Vec<char>>,
    row: usize,
    col: usize,
    char_limit: usize,
    placeholder: &'static str,
    focused: bool,
    blink: bool,
}

impl TextArea {
    pub fn new(char_limit: usize) -> Self {
        Self {
            lines: vec![Vec::new()],
            row: 0,
            col: 0,
            char_limit,
            placeholder: "",
            focused: false,
            blink: true,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn value(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().flatten().all(|c| c.is_whitespace())
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
        self.lines = vec![Vec::new()];
        self.row = 0;
        self.col = 0;
    }

    pub fn tick(&mut self) {
        if self.focused {
            self.blink = !self.blink;
        }
    }

    fn len(&self) -> usize {
        self.lines.iter().map(Vec::len).sum::<usize>() + self.lines.len() - 1
    }

    fn has_room(&self) -> bool {
        self.len() < self.char_limit
    }

    fn insert_newline(&mut self) {
        let rest = self.lines[self.row].split_off(self.col);
        self.row += 1;
        self.col = 0;
        self.lines.insert(self.row, rest);
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            self.lines[self.row].remove(self.col);
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.lines[self.row].len();
            self.lines[self.row].extend(line);
        }
    }

    fn delete(&mut self) {
        if self.col < self.lines[self.row].len() {
            self.lines[self.row].remove(self.col);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].extend(next);
        }
    }

    fn move_vertical(&mut self, row: usize) {
        self.row = row;
        self.col = self.col.min(self.lines[row].len());
    }

    /// Apply an editing key, returns whether the key was used
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !self.focused {
            return false;
        }

        if let Some(c) = typed_char(key) {
            if self.has_room() {
                self.lines[self.row].insert(self.col, c);
                self.col += 1;
            }
            self.blink = true;
            return true;
        }

        if key.modifiers != KeyModifiers::NONE {
            return false;
        }

        match key.code {
            KeyCode::Enter => {
                if self.has_room() {
                    self.insert_newline();
                }
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = self.lines[self.row].len();
                }
            }
            KeyCode::Right => {
                if self.col < self.lines[self.row].len() {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
            }
            KeyCode::Up if self.row > 0 => self.move_vertical(self.row - 1),
            KeyCode::Down if self.row + 1 < self.lines.len() => self.move_vertical(self.row + 1),
            KeyCode::Up | KeyCode::Down => {}
            KeyCode::Home => self.col = 0,
            KeyCode::End => self.col = self.lines[self.row].len(),
            _ => return false,
        }
        self.blink = true;
        true
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let gutter = || Span::styled("┃ ", theme::ACCENT);

        if self.lines.len() == 1 && self.lines[0].is_empty() && !self.placeholder.is_empty() {
            return vec![Line::from(vec![
                gutter(),
                Span::styled(self.placeholder, theme::MUTED),
            ])];
        }

        self.lines
            .iter()
            .enumerate()
            .map(|(row, chars)| {
                let mut spans = vec![gutter()];
                if row == self.row {
                    spans.extend(super::cursor_spans(
                        chars,
                        self.col,
                        self.focused && self.blink,
                    ));
                } else {
                    spans.push(Span::raw(chars.iter().collect::<String>()));
                }
                Line::from(spans)
            })
            .collect()
    }
}
