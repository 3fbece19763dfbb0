use std::sync::Arc;

use crossterm::event::KeyEvent;
use kotoba_core::Explainer;
use ratatui::text::Text;

use super::{Screen, layout};
use crate::event::Event;
use crate::keys::Keymap;
use crate::task::Task;
use crate::transition::Transition;
use crate::widgets::TextInput;

const CHAR_LIMIT: usize = 255;

pub struct ExplainerScreen {
    input: TextInput,
    explainer: Arc<dyn Explainer>,
}

impl ExplainerScreen {
    pub fn new(explainer: Arc<dyn Explainer>) -> Self {
        let mut input = TextInput::new(CHAR_LIMIT).with_placeholder("私はバカな男だ");
        input.focus();
        Self { input, explainer }
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
            let sentence = self.input.value();
            self.input.reset();
            return Task::with_loading(ask(self.explainer.clone(), sentence));
        }

        if Keymap::BACK.matches(key) {
            self.input.reset();
            return Task::emit(Transition::Menu);
        }

        self.input.handle_key(key);
        Task::none()
    }
}

async fn ask(explainer: Arc<dyn Explainer>, sentence: String) -> Transition {
    match explainer.ask(&sentence).await {
        Ok(explanation) => {
            tracing::info!(original = %explanation.original, "explanation ready");
            Transition::ExplainerDetail(Box::new(explanation))
        }
        Err(e) => Transition::Error(e.into()),
    }
}

impl Screen for ExplainerScreen {
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
            "Insert Japanese Sentence to get the explanation:",
            vec![self.input.line()],
            "esc/ctrl+c: exit • ctrl+q: back to menu • enter: ask",
        )
    }
}
