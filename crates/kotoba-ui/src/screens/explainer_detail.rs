use kotoba_types::Explanation;
use ratatui::text::{Line, Text};

use super::{Screen, scroll};
use crate::event::Event;
use crate::keys::Keymap;
use crate::render::{explanation_lines, footnote};
use crate::task::Task;
use crate::transition::Transition;
use crate::widgets::Viewport;

#[derive(Debug, Default)]
pub struct ExplainerDetailScreen {
    explanation: Option<Explanation>,
    viewport: Viewport,
}

impl ExplainerDetailScreen {
    pub fn set_item(&mut self, explanation: Explanation) {
        self.viewport.set_lines(explanation_lines(&explanation));
        self.explanation = Some(explanation);
    }

    pub fn explanation(&self) -> Option<&Explanation> {
        self.explanation.as_ref()
    }
}

impl Screen for ExplainerDetailScreen {
    fn update(&mut self, event: &Event) -> Task {
        let Event::Key(key) = event else {
            return Task::none();
        };

        if Keymap::BACK.matches(key) {
            return Task::emit(Transition::Explainer);
        }
        scroll(&mut self.viewport, key);
        Task::none()
    }

    fn view(&self) -> Text<'static> {
        let mut lines = vec![Line::default()];
        lines.extend(self.viewport.visible_lines().cloned());
        lines.push(Line::default());
        lines.push(footnote("↑/k up • ↓/j down • ctrl+q: back to explainer"));
        Text::from(lines)
    }
}
