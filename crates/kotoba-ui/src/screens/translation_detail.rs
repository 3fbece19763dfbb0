use kotoba_types::Translation;
use ratatui::text::{Line, Text};

use super::Screen;
use crate::event::Event;
use crate::keys::Keymap;
use crate::render::{footnote, translation_lines};
use crate::task::Task;
use crate::transition::Transition;

#[derive(Debug, Default)]
pub struct TranslationDetailScreen {
    translations: Vec<Translation>,
}

impl TranslationDetailScreen {
    pub fn set_items(&mut self, translations: Vec<Translation>) {
        self.translations = translations;
    }

    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }
}

impl Screen for TranslationDetailScreen {
    fn update(&mut self, event: &Event) -> Task {
        match event {
            Event::Key(key) if Keymap::BACK.matches(key) => Task::emit(Transition::Translate),
            _ => Task::none(),
        }
    }

    fn view(&self) -> Text<'static> {
        let mut lines = vec![Line::default()];
        lines.extend(translation_lines(&self.translations));
        lines.push(Line::default());
        lines.push(footnote("ctrl+q: back to translation"));
        Text::from(lines)
    }
}
