use ratatui::text::Line;

/// Read-only scrollable block of lines. The view shows everything from the
/// current offset, the terminal clips the rest.
#[derive(Debug, Default, Clone)]
pub struct Viewport {
    lines: Vec<Line<'static>>,
    offset: usize,
}

impl Viewport {
    pub fn set_lines(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
        self.offset = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn scroll_up(&mut self, by: usize) {
        self.offset = self.offset.saturating_sub(by);
    }

    pub fn scroll_down(&mut self, by: usize) {
        self.offset = (self.offset + by).min(self.lines.len().saturating_sub(1));
    }

    pub fn visible_lines(&self) -> impl Iterator<Item = &Line<'static>> {
        self.lines.iter().skip(self.offset)
    }
}
