use std::sync::Arc;

use crossterm::event::KeyEvent;
use kotoba_translator::{TargetLanguage, Translator};
use ratatui::text::Text;

use super::{Screen, layout};
use crate::event::Event;
use crate::keys::Keymap;
use crate::task::Task;
use crate::transition::Transition;
use crate::widgets::{Cycle, TextArea};

const CHAR_LIMIT: usize = 2000;

pub struct TranslatorScreen {
    area: TextArea,
    target: Cycle<TargetLanguage>,
    translator: Arc<dyn Translator>,
}

impl TranslatorScreen {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        let mut area = TextArea::new(CHAR_LIMIT).with_placeholder("私はバカな男だ");
        area.focus();
        Self {
            area,
            target: Cycle::new(&TargetLanguage::ALL),
            translator,
        }
    }

    pub fn focus(&mut self) {
        self.area.focus();
    }

    pub fn target(&self) -> TargetLanguage {
        self.target.current()
    }

    pub fn text(&self) -> String {
        self.area.value()
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Task {
        if Keymap::LANGUAGE_PREV.matches(key) {
            self.target.prev();
            return Task::none();
        }
        if Keymap::LANGUAGE_NEXT.matches(key) {
            self.target.next();
            return Task::none();
        }

        if Keymap::TRANSLATE.matches(key) {
            if self.area.is_empty() {
                return Task::none();
            }
            let text = self.area.value();
            self.area.reset();
            return Task::with_loading(translate(
                self.translator.clone(),
                self.target.current(),
                text,
            ));
        }

        if Keymap::BACK.matches(key) {
            self.area.reset();
            return Task::emit(Transition::Menu);
        }

        if !self.area.is_focused() {
            self.area.focus();
        }
        self.area.handle_key(key);
        Task::none()
    }
}

async fn translate(
    translator: Arc<dyn Translator>,
    target: TargetLanguage,
    text: String,
) -> Transition {
    match translator.translate(target, &[text]).await {
        Ok(translations) => Transition::TranslateDetail(translations),
        Err(e) => Transition::Error(e.into()),
    }
}

impl Screen for TranslatorScreen {
    fn init(&mut self) -> Task {
        self.area.focus();
        Task::none()
    }

    fn update(&mut self, event: &Event) -> Task {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => {
                self.area.tick();
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn view(&self) -> Text<'static> {
        let options = self.target.options();
        let index = self.target.index();
        let prev = options[(index + options.len() - 1) % options.len()];
        let next = options[(index + 1) % options.len()];

        layout(
            format!("What do you want to translate to {}?", self.target.current()),
            self.area.lines(),
            &format!(
                "esc/ctrl+c: exit • ctrl+q: back to menu • shift+left: {prev} • shift+right: {next} • ctrl+t: translate"
            ),
        )
    }
}
