//! Small stateful building blocks the screens are made of.

pub mod cycle;
pub mod select_list;
pub mod spinner;
pub mod text_area;
pub mod text_input;
pub mod viewport;

pub use cycle::Cycle;
pub use select_list::SelectList;
pub use spinner::Spinner;
pub use text_area::TextArea;
pub use text_input::TextInput;
pub use viewport::Viewport;

use ratatui::text::Span;

use crate::theme;

/// Split `chars` around `cursor` so the character under it can be styled
pub fn cursor_spans(chars: &[char], cursor: usize, visible: bool) -> Vec<Span<'static>> {
    let cursor = cursor.min(chars.len());
    let before: String = chars[..cursor].iter().collect();
    let (under, after) = match chars.get(cursor) {
        Some(c) => (c.to_string(), chars[cursor + 1..].iter().collect()),
        None => (" ".to_string(), String::new()),
    };

    let under = if visible {
        Span::styled(under, theme::CURSOR)
    } else {
        Span::raw(under)
    };

    vec![Span::raw(before), under, Span::raw(after)]
}
