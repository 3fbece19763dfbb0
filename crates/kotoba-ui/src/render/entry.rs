use kotoba_types::{Entry, Sense};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme;

/// One list row: position, headword and the first sense
pub fn entry_row(position: usize, entry: &Entry, selected: bool) -> Line<'static> {
    let (marker, style) = if selected {
        ("> ", theme::HIGHLIGHT)
    } else {
        ("  ", theme::TEXT)
    };

    let summary = entry
        .senses
        .first()
        .map(|sense| sense.english_definitions.join(", "))
        .unwrap_or_default();

    Line::from(vec![
        Span::styled(format!("{marker}{position}. {}", entry.slug), style),
        Span::styled(format!("  {summary}"), theme::MUTED),
    ])
}

/// Full entry: every written form interleaved with the senses
pub fn entry_lines(entry: &Entry) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::raw("Entry: "),
        Span::styled(
            entry.slug.clone(),
            theme::TEXT_BOLD.add_modifier(Modifier::UNDERLINED),
        ),
    ])];

    let mut tags = Vec::new();
    if entry.is_common {
        tags.push("common word".to_string());
    }
    tags.extend(entry.jlpt.iter().cloned());
    if !tags.is_empty() {
        lines.push(Line::styled(tags.join(" · "), theme::MUTED));
    }

    for i in 0..entry.japanese.len().max(entry.senses.len()) {
        if let Some(form) = entry.japanese.get(i) {
            lines.push(Line::default());
            lines.push(match &form.word {
                Some(word) if !word.is_empty() => Line::from(vec![
                    Span::styled(word.clone(), theme::TEXT),
                    Span::raw(" "),
                    Span::styled(format!("({})", form.reading), theme::MUTED_BOLD),
                ]),
                _ => Line::styled(form.reading.clone(), theme::TEXT),
            });
        }

        if let Some(sense) = entry.senses.get(i) {
            lines.push(Line::default());
            lines.extend(sense_lines(sense));
        }
    }

    lines
}

fn sense_lines(sense: &Sense) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if !sense.parts_of_speech.is_empty() {
        lines.push(Line::styled(
            format!("  {}", sense.parts_of_speech.join(", ")),
            theme::MUTED_BOLD.add_modifier(Modifier::ITALIC),
        ));
    }

    for definition in &sense.english_definitions {
        lines.push(Line::from(vec![
            Span::styled("  • ", theme::ACCENT),
            Span::styled(definition.clone(), theme::TEXT),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use kotoba_types::JapaneseForm;

    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn rain() -> Entry {
        Entry {
            slug: "雨".into(),
            is_common: true,
            jlpt: vec!["jlpt-n5".into()],
            japanese: vec![JapaneseForm {
                word: Some("雨".into()),
                reading: "あめ".into(),
            }],
            senses: vec![Sense {
                english_definitions: vec!["rain".into(), "rainfall".into()],
                parts_of_speech: vec!["Noun".into()],
            }],
        }
    }

    #[test]
    fn detail_lists_forms_and_senses() {
        let text = plain(&entry_lines(&rain()));
        assert_eq!(text[0], "Entry: 雨");
        assert_eq!(text[1], "common word · jlpt-n5");
        assert!(text.contains(&"雨 (あめ)".to_string()));
        assert!(text.contains(&"  Noun".to_string()));
        assert!(text.contains(&"  • rainfall".to_string()));
    }

    #[test]
    fn row_shows_position_and_first_sense() {
        assert_eq!(entry_row(1, &rain(), false).to_string(), "  1. 雨  rain, rainfall");
        assert_eq!(entry_row(3, &rain(), true).to_string(), "> 3. 雨  rain, rainfall");
    }
}
