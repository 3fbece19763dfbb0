use kotoba_types::Translation;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme;

pub fn translation_lines(translations: &[Translation]) -> Vec<Line<'static>> {
    let Some(first) = translations.first() else {
        return Vec::new();
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Source: "),
            Span::styled(
                first.detected_source_language.clone(),
                theme::TEXT_BOLD.add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::default(),
    ];

    for translation in translations {
        lines.extend(
            translation
                .text
                .lines()
                .map(|line| Line::styled(line.to_string(), theme::TEXT)),
        );
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_source_language_then_texts() {
        let lines = translation_lines(&[Translation {
            detected_source_language: "JA".into(),
            text: "It is raining.\nTake an umbrella.".into(),
        }]);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text, ["Source: JA", "", "It is raining.", "Take an umbrella."]);
    }

    #[test]
    fn nothing_to_show_without_translations() {
        assert!(translation_lines(&[]).is_empty());
    }
}
