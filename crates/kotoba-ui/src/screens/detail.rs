use crossterm::event::KeyEvent;
use kotoba_types::Entry;
use ratatui::text::{Line, Text};

use super::{Screen, scroll};
use crate::event::Event;
use crate::keys::Keymap;
use crate::render::{entry_lines, footnote};
use crate::task::Task;
use crate::transition::Transition;
use crate::widgets::Viewport;

#[derive(Debug, Default)]
pub struct DetailScreen {
    entry: Option<Entry>,
    viewport: Viewport,
}

impl DetailScreen {
    pub fn set_item(&mut self, entry: Entry) {
        self.viewport.set_lines(entry_lines(&entry));
        self.entry = Some(entry);
    }

    pub fn entry(&self) -> Option<&Entry> {
        self.entry.as_ref()
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Task {
        if Keymap::TO_SEARCH.matches(key) {
            return Task::emit(Transition::Search);
        }
        if Keymap::BACK.matches(key) {
            return Task::emit(Transition::ReturnToDictionaryList);
        }

        scroll(&mut self.viewport, key);
        Task::none()
    }
}

impl Screen for DetailScreen {
    fn update(&mut self, event: &Event) -> Task {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => Task::none(),
        }
    }

    fn view(&self) -> Text<'static> {
        let mut lines = vec![Line::default()];
        lines.extend(self.viewport.visible_lines().cloned());
        lines.push(Line::default());
        lines.push(footnote(
            "↑/k up • ↓/j down • ctrl+s: back to search • ctrl+q: back to dictionary",
        ));
        Text::from(lines)
    }
}
