use ratatui::style::{Color, Modifier, Style};

pub const HIGHLIGHT: Style = Style::new().fg(Color::Indexed(170));
pub const HIGHLIGHT_BOLD: Style = HIGHLIGHT.add_modifier(Modifier::BOLD);
pub const TEXT: Style = Style::new().fg(Color::Indexed(252));
pub const TEXT_BOLD: Style = TEXT.add_modifier(Modifier::BOLD);
pub const MUTED: Style = Style::new().fg(Color::Indexed(241));
pub const MUTED_BOLD: Style = MUTED.add_modifier(Modifier::BOLD);
pub const ACCENT: Style = Style::new().fg(Color::Indexed(99));
pub const SPINNER: Style = Style::new().fg(Color::Indexed(69));
pub const TITLE: Style = Style::new()
    .fg(Color::Indexed(230))
    .bg(Color::Indexed(62))
    .add_modifier(Modifier::BOLD);
pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
pub const CHECKED: Style = Style::new().fg(Color::Indexed(212));
