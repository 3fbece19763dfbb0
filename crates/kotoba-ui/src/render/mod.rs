//! Plain text renderers for the data the detail screens display.

mod entry;
mod explanation;
mod translation;

pub use entry::{entry_lines, entry_row};
pub use explanation::explanation_lines;
pub use translation::translation_lines;

use ratatui::text::Line;

use crate::theme;

/// Muted key hint line shown under every screen
pub fn footnote(text: &str) -> Line<'static> {
    Line::styled(text.to_string(), theme::MUTED)
}
