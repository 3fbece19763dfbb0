use serde::{Deserialize, Serialize};

/// A single dictionary hit as returned by Jisho
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub slug: String,
    pub is_common: bool,
    pub jlpt: Vec<String>,
    pub japanese: Vec<JapaneseForm>,
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JapaneseForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    pub reading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sense {
    pub english_definitions: Vec<String>,
    pub parts_of_speech: Vec<String>,
}

impl Entry {
    /// Text the list filter matches against: slug, readings, definitions and
    /// parts of speech joined by spaces
    pub fn filter_value(&self) -> String {
        let mut value = self.slug.clone();

        for form in &self.japanese {
            value.push(' ');
            value.push_str(&form.reading);
        }

        for sense in &self.senses {
            for word in sense
                .english_definitions
                .iter()
                .chain(sense.parts_of_speech.iter())
            {
                value.push(' ');
                value.push_str(word);
            }
        }

        value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub detected_source_language: String,
    pub text: String,
}

/// Structured explanation of a Japanese sentence
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Explanation {
    #[serde(deserialize_with = "null_as_default")]
    pub original: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kana: String,
    #[serde(deserialize_with = "null_as_default")]
    pub romaji: String,
    #[serde(deserialize_with = "null_as_default")]
    pub literal_translation: String,
    #[serde(deserialize_with = "null_items")]
    pub natural_translations: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub gloss_lines: GlossLines,
    #[serde(deserialize_with = "null_items")]
    pub word_by_word: Vec<WordGloss>,
    #[serde(deserialize_with = "null_items")]
    pub grammar_points: Vec<GrammarPoint>,
    #[serde(deserialize_with = "null_as_default")]
    pub nuance_and_register: String,
    #[serde(deserialize_with = "null_items")]
    pub common_errors: Vec<String>,
    #[serde(deserialize_with = "null_items")]
    pub paraphrases_and_alternatives: Vec<String>,
    #[serde(deserialize_with = "null_items")]
    pub practice_exercises: Vec<PracticeExercise>,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossLines {
    #[serde(deserialize_with = "null_as_default")]
    pub surface: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reading: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gloss: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WordGloss {
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reading: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pos: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarPoint {
    #[serde(deserialize_with = "null_as_default")]
    pub point: String,
    #[serde(deserialize_with = "null_as_default")]
    pub explanation: String,
    #[serde(deserialize_with = "null_items")]
    pub similar_examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeExercise {
    #[serde(deserialize_with = "null_as_default")]
    pub task: String,
    #[serde(deserialize_with = "null_as_default")]
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    #[default]
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// The model sometimes answers `null` for fields it could not analyze
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like [`null_as_default`], also for `null` items inside the list
fn null_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
