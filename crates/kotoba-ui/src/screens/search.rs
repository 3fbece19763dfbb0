use std::sync::Arc;

use crossterm::event::KeyEvent;
use kotoba_core::DictionarySearch;
use ratatui::text::Text;

use super::{Screen, layout};
use crate::event::Event;
use crate::keys::Keymap;
use crate::task::Task;
use crate::transition::Transition;
use crate::widgets::TextInput;

const CHAR_LIMIT: usize = 60;

pub struct SearchScreen {
    input: TextInput,
    dictionary: Arc<dyn DictionarySearch>,
}

impl SearchScreen {
    pub fn new(dictionary: Arc<dyn DictionarySearch>) -> Self {
        let mut input = TextInput::new(CHAR_LIMIT).with_placeholder("water");
        input.focus();
        Self { input, dictionary }
    }

    pub fn focus(&mut self) {
        self.input.focus();
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Task {
        if Keymap::CONFIRM.matches(key) {
            if self.input.is_empty() {
                return Task::none();
            }
            let keyword = self.input.value().trim().to_string();
            self.input.reset();
            return Task::with_loading(lookup(self.dictionary.clone(), keyword));
        }

        if Keymap::TRANSLATE.matches(key) {
            return Task::emit(Transition::Translate);
        }

        if Keymap::BACK.matches(key) {
            return Task::emit(Transition::Menu);
        }

        self.input.handle_key(key);
        Task::none()
    }
}

async fn lookup(dictionary: Arc<dyn DictionarySearch>, keyword: String) -> Transition {
    match dictionary.search(&keyword).await {
        Ok(entries) => {
            tracing::debug!(%keyword, hits = entries.len(), "lookup finished");
            Transition::DictionaryList(entries)
        }
        Err(e) => Transition::Error(e.into()),
    }
}

impl Screen for SearchScreen {
    fn init(&mut self) -> Task {
        self.input.focus();
        Task::none()
    }

    fn update(&mut self, event: &Event) -> Task {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => {
                self.input.tick();
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn view(&self) -> Text<'static> {
        layout(
            "What do you want to know?",
            vec![self.input.line()],
            "esc/ctrl+c: exit • enter: search • ctrl+t: translate • ctrl+q: menu",
        )
    }
}
