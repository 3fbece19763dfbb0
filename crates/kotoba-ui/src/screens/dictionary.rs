use crossterm::event::KeyEvent;
use kotoba_types::Entry;
use ratatui::text::{Line, Span, Text};

use super::Screen;
use crate::event::Event;
use crate::keys::{Keymap, typed_char};
use crate::render::{entry_row, footnote};
use crate::task::Task;
use crate::theme;
use crate::transition::Transition;
use crate::widgets::{SelectList, cursor_spans};

const PAGE: usize = 10;

pub struct DictionaryScreen {
    list: SelectList<Entry>,
}

impl DictionaryScreen {
    pub fn new() -> Self {
        Self {
            list: SelectList::new(Entry::filter_value),
        }
    }

    pub fn set_items(&mut self, entries: Vec<Entry>) {
        self.list.set_items(entries);
    }

    pub fn list(&self) -> &SelectList<Entry> {
        &self.list
    }

    pub fn select(&mut self, index: usize) {
        self.list.select(index);
    }

    fn handle_filter_key(&mut self, key: &KeyEvent) {
        if Keymap::CONFIRM.matches(key) {
            self.list.accept_filter();
        } else if Keymap::ERASE.matches(key) {
            if !self.list.pop_filter() {
                self.list.clear_filter();
            }
        } else if Keymap::UP.matches(key) {
            self.list.select_prev();
        } else if Keymap::DOWN.matches(key) {
            self.list.select_next();
        } else if let Some(c) = typed_char(key) {
            self.list.push_filter(c);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Task {
        if self.list.is_filtering() {
            self.handle_filter_key(key);
            return Task::none();
        }

        if Keymap::CONFIRM.matches(key) {
            return match self.list.selected_item() {
                Some(entry) => Task::emit(Transition::Detail(Box::new(entry.clone()))),
                None => Task::none(),
            };
        }

        if Keymap::ERASE.matches(key) {
            if self.list.is_filter_applied() {
                self.list.clear_filter();
                return Task::none();
            }
            return Task::emit(Transition::Search);
        }

        if Keymap::FILTER.matches(key) {
            self.list.start_filter();
        } else if Keymap::is_up(key) {
            self.list.select_prev();
        } else if Keymap::is_down(key) {
            self.list.select_next();
        } else if Keymap::PAGE_UP.matches(key) {
            self.list.page_up(PAGE);
        } else if Keymap::PAGE_DOWN.matches(key) {
            self.list.page_down(PAGE);
        }
        Task::none()
    }

    fn filter_line(&self) -> Option<Line<'static>> {
        if self.list.is_filtering() {
            let chars: Vec<char> = self.list.filter().chars().collect();
            let mut spans = vec![Span::styled("Filter: ", theme::ACCENT)];
            spans.extend(cursor_spans(&chars, chars.len(), true));
            Some(Line::from(spans))
        } else if self.list.is_filter_applied() {
            Some(Line::from(vec![
                Span::styled("Filter: ", theme::ACCENT),
                Span::styled(self.list.filter().to_string(), theme::MUTED),
            ]))
        } else {
            None
        }
    }
}

impl Default for DictionaryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for DictionaryScreen {
    fn update(&mut self, event: &Event) -> Task {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => Task::none(),
        }
    }

    fn view(&self) -> Text<'static> {
        if self.list.items().is_empty() {
            return Text::from(vec![
                Line::default(),
                Line::raw("No items found"),
                Line::default(),
                footnote("backspace: back to search"),
            ]);
        }

        let mut lines = vec![
            Line::default(),
            Line::styled(" Dictionary ", theme::TITLE),
            Line::default(),
        ];
        lines.extend(self.filter_line());

        let selected = self.list.selected();
        let page_start = selected / PAGE * PAGE;
        lines.extend(
            self.list
                .visible()
                .enumerate()
                .skip(page_start)
                .take(PAGE)
                .map(|(i, entry)| entry_row(i + 1, entry, i == selected)),
        );

        if self.list.visible_len() == 0 {
            lines.push(Line::styled("No matches", theme::MUTED));
        } else {
            let pages = self.list.visible_len().div_ceil(PAGE);
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("page {}/{}", page_start / PAGE + 1, pages),
                theme::MUTED,
            ));
        }

        lines.push(Line::default());
        lines.push(footnote(
            "↑/k up • ↓/j down • /: filter • enter: select entry • backspace: back to search",
        ));
        Text::from(lines)
    }
}
