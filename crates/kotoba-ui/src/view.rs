use ratatui::Frame;
use ratatui::layout::Margin;
use ratatui::widgets::{Paragraph, Wrap};

use crate::engine::Engine;

pub fn draw(frame: &mut Frame, engine: &Engine) {
    let area = frame.area().inner(Margin::new(2, 0));
    let body = Paragraph::new(engine.render()).wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}
