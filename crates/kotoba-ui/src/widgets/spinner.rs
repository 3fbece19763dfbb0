use ratatui::text::Span;

use crate::theme;

const FRAMES: [&str; 4] = ["∙∙∙", "●∙∙", "∙●∙", "∙∙●"];

#[derive(Debug, Default, Clone)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn reset(&mut self) {
        self.frame = 0;
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(FRAMES[self.frame], theme::SPINNER)
    }
}
