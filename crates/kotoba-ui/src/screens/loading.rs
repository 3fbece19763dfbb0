use ratatui::text::{Line, Span, Text};

use super::Screen;
use crate::event::Event;
use crate::render::footnote;
use crate::task::Task;
use crate::widgets::Spinner;

/// Shown while exactly one spawned task is in flight. Keys other than the
/// global quit keys do nothing here.
#[derive(Debug, Default)]
pub struct LoadingScreen {
    spinner: Spinner,
}

impl LoadingScreen {
    pub fn start(&mut self) {
        self.spinner.reset();
    }

    pub fn frame(&self) -> usize {
        self.spinner.frame()
    }
}

impl Screen for LoadingScreen {
    fn update(&mut self, event: &Event) -> Task {
        if let Event::Tick = event {
            self.spinner.tick();
        }
        Task::none()
    }

    fn view(&self) -> Text<'static> {
        Text::from(vec![
            Line::default(),
            Line::from(vec![Span::raw("Now loading "), self.spinner.span()]),
            Line::default(),
            footnote("esc: exit"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    fn ticks_advance_and_start_resets() {
        let mut loading = LoadingScreen::default();
        loading.update(&Event::Tick);
        loading.update(&Event::Tick);
        assert_eq!(loading.frame(), 2);

        loading.start();
        assert_eq!(loading.frame(), 0);
    }

    #[test]
    fn keys_are_ignored() {
        let mut loading = LoadingScreen::default();
        let task = loading.update(&Event::Key(KeyEvent::new(
            KeyCode::Enter,
            KeyModifiers::NONE,
        )));
        assert!(task.is_none());
        assert_eq!(loading.frame(), 0);
    }
}
