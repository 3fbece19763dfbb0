use kotoba_types::Explanation;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme;

/// Explanation split into its core, analysis and usage sections
pub fn explanation_lines(explanation: &Explanation) -> Vec<Line<'static>> {
    let mut lines = core(explanation);
    lines.push(Line::default());
    lines.extend(analysis(explanation));
    lines.push(Line::default());
    lines.extend(usage(explanation));
    lines
}

fn heading(text: &str) -> Line<'static> {
    Line::styled(text.to_string(), theme::TEXT_BOLD)
}

fn none(text: &'static str) -> Line<'static> {
    Line::styled(text, theme::MUTED)
}

fn bullets(items: &[String], empty: &'static str) -> Vec<Line<'static>> {
    if items.is_empty() {
        return vec![none(empty)];
    }
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("• ", theme::ACCENT),
                Span::styled(item.clone(), theme::TEXT),
            ])
        })
        .collect()
}

fn core(x: &Explanation) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            format!("Sentence: {} ( {} )", x.original, x.kana),
            theme::TEXT_BOLD,
        ),
        Line::styled(format!("Romaji: {}", x.romaji), theme::TEXT),
        Line::default(),
        heading("Translations:"),
        Line::from(vec![Span::styled("> ", theme::ACCENT), Span::raw("Literal:")]),
        Line::styled(x.literal_translation.clone(), theme::TEXT),
        Line::from(vec![Span::styled("> ", theme::ACCENT), Span::raw("Natural:")]),
    ];
    lines.extend(
        x.natural_translations
            .iter()
            .map(|t| Line::styled(t.clone(), theme::TEXT)),
    );

    let gloss = &x.gloss_lines;
    if !(gloss.surface.is_empty() && gloss.reading.is_empty() && gloss.gloss.is_empty()) {
        lines.push(Line::default());
        lines.push(heading("Gloss:"));
        lines.push(Line::styled(gloss.surface.clone(), theme::TEXT));
        lines.push(Line::styled(gloss.reading.clone(), theme::MUTED));
        lines.push(Line::styled(gloss.gloss.clone(), theme::TEXT));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        format!("Confidence: {}", x.confidence.as_str()),
        theme::TEXT,
    ));
    lines
}

fn analysis(x: &Explanation) -> Vec<Line<'static>> {
    let italic = theme::TEXT_BOLD.add_modifier(Modifier::ITALIC);
    let mut lines = vec![heading("Gloss Analysis:")];

    if x.word_by_word.is_empty() {
        lines.push(none("None"));
    }
    for word in &x.word_by_word {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", word.token), italic),
            Span::styled(format!("({})", word.reading), theme::MUTED),
            Span::styled(" → ", theme::ACCENT),
            Span::styled(format!("{} ({})", word.pos, word.meaning), theme::TEXT),
        ]));
    }

    lines.push(Line::default());
    lines.push(heading("Grammar Points:"));
    if x.grammar_points.is_empty() {
        lines.push(none("None"));
    }
    for (i, point) in x.grammar_points.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), theme::ACCENT),
            Span::styled(format!("{} ", point.point), italic),
            Span::styled(point.explanation.clone(), theme::TEXT),
        ]));
        for example in &point.similar_examples {
            lines.push(Line::from(vec![
                Span::styled("    → ", theme::ACCENT),
                Span::styled(example.clone(), theme::MUTED),
            ]));
        }
    }

    lines
}

fn usage(x: &Explanation) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Nuances:")];
    if x.nuance_and_register.trim().is_empty() {
        lines.push(none("None provided"));
    } else {
        lines.extend(
            x.nuance_and_register
                .lines()
                .map(|line| Line::styled(line.to_string(), theme::TEXT)),
        );
    }

    lines.push(Line::default());
    lines.push(heading("Errors:"));
    lines.extend(bullets(&x.common_errors, "None"));

    lines.push(Line::default());
    lines.push(heading("Alternatives:"));
    lines.extend(bullets(&x.paraphrases_and_alternatives, "None"));

    lines.push(Line::default());
    lines.push(heading("Practice Exercises:"));
    if x.practice_exercises.is_empty() {
        lines.push(none("None"));
    }
    for (i, exercise) in x.practice_exercises.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), theme::ACCENT),
            Span::styled(
                exercise.task.clone(),
                theme::TEXT_BOLD.add_modifier(Modifier::ITALIC),
            ),
        ]));
        lines.push(Line::styled(
            format!("    Answer: {}", exercise.answer),
            theme::MUTED,
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use kotoba_types::{GrammarPoint, PracticeExercise};

    use super::*;

    fn text(x: &Explanation) -> Vec<String> {
        explanation_lines(x).iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn empty_explanation_still_has_every_section() {
        let lines = text(&Explanation::default());
        for heading in [
            "Translations:",
            "Gloss Analysis:",
            "Grammar Points:",
            "Nuances:",
            "Errors:",
            "Practice Exercises:",
        ] {
            assert!(lines.iter().any(|l| l == heading), "missing {heading}");
        }
        assert!(lines.contains(&"None provided".to_string()));
        assert!(lines.contains(&"Confidence: medium".to_string()));
    }

    #[test]
    fn numbers_grammar_points_and_exercises_from_one() {
        let explanation = Explanation {
            original: "雨が降る".into(),
            grammar_points: vec![GrammarPoint {
                point: "が".into(),
                explanation: "marks the subject".into(),
                similar_examples: vec!["雪が降る".into()],
            }],
            practice_exercises: vec![PracticeExercise {
                task: "translate".into(),
                answer: "it rains".into(),
            }],
            ..Default::default()
        };

        let lines = text(&explanation);
        assert!(lines.contains(&"1. が marks the subject".to_string()));
        assert!(lines.contains(&"    → 雪が降る".to_string()));
        assert!(lines.contains(&"1. translate".to_string()));
        assert!(lines.contains(&"    Answer: it rains".to_string()));
    }
}
