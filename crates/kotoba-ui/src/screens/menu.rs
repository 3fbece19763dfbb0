use crossterm::event::KeyEvent;
use ratatui::text::{Line, Text};

use super::{Screen, layout};
use crate::event::Event;
use crate::keys::Keymap;
use crate::task::Task;
use crate::theme;
use crate::transition::Transition;
use crate::widgets::Cycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    Translate,
    Explain,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 3] = [MenuChoice::Search, MenuChoice::Translate, MenuChoice::Explain];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Search => "Search",
            MenuChoice::Translate => "Translate",
            MenuChoice::Explain => "Explain",
        }
    }

    fn transition(self) -> Transition {
        match self {
            MenuChoice::Search => Transition::Search,
            MenuChoice::Translate => Transition::Translate,
            MenuChoice::Explain => Transition::Explainer,
        }
    }
}

pub struct MenuScreen {
    choices: Cycle<MenuChoice>,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self {
            choices: Cycle::new(&MenuChoice::ALL),
        }
    }

    pub fn selected(&self) -> MenuChoice {
        self.choices.current()
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Task {
        if Keymap::CONFIRM.matches(key) {
            return Task::emit(self.choices.current().transition());
        }

        if Keymap::UP.matches(key) || Keymap::LEFT.matches(key) {
            self.choices.prev();
        } else if Keymap::DOWN.matches(key) || Keymap::RIGHT.matches(key) {
            self.choices.next();
        }
        Task::none()
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    fn update(&mut self, event: &Event) -> Task {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => Task::none(),
        }
    }

    fn view(&self) -> Text<'static> {
        let body = self
            .choices
            .options()
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                if i == self.choices.index() {
                    Line::styled(format!("[x] {}", choice.label()), theme::CHECKED)
                } else {
                    Line::raw(format!("[ ] {}", choice.label()))
                }
            })
            .collect();

        layout(
            "What do you want to do?",
            body,
            "esc/ctrl+c: exit • enter: choose • up/down: select",
        )
    }
}
