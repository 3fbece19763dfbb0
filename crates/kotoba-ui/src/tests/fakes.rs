use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kotoba_core::{DictionarySearch, ExplainError, Explainer, LookupError};
use kotoba_lang_japanese::longest_japanese_run;
use kotoba_translator::{ProviderMetadata, TargetLanguage, TranslateError, Translator};
use kotoba_types::{Entry, Explanation, JapaneseForm, Sense, Translation};

use crate::engine::Engine;
use crate::event::{Event, Ticket};
use crate::screens::Screens;
use crate::task::{Effect, TaskFuture};

#[derive(Default)]
pub(crate) struct FakeDictionary {
    pub entries: Vec<Entry>,
    pub fail: bool,
    pub keywords: Mutex<Vec<String>>,
}

#[async_trait]
impl DictionarySearch for FakeDictionary {
    async fn search(&self, keyword: &str) -> Result<Vec<Entry>, LookupError> {
        self.keywords.lock().unwrap().push(keyword.to_string());
        if self.fail {
            return Err(LookupError::Decode("connection reset".into()));
        }
        Ok(self.entries.clone())
    }
}

#[derive(Default)]
pub(crate) struct FakeTranslator {
    pub fail: bool,
    pub requests: Mutex<Vec<(TargetLanguage, Vec<String>)>>,
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        target: TargetLanguage,
        texts: &[String],
    ) -> Result<Vec<Translation>, TranslateError> {
        self.requests
            .lock()
            .unwrap()
            .push((target, texts.to_vec()));
        if self.fail {
            return Err(TranslateError::RateLimitExceeded);
        }
        Ok(texts
            .iter()
            .map(|text| Translation {
                detected_source_language: "JA".into(),
                text: format!("[{}] {text}", target.code()),
            })
            .collect())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".into(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// Rejects input without Japanese script like the real client does
#[derive(Default)]
pub(crate) struct FakeExplainer;

#[async_trait]
impl Explainer for FakeExplainer {
    async fn ask(&self, sentence: &str) -> Result<Explanation, ExplainError> {
        let japanese = longest_japanese_run(sentence).ok_or(ExplainError::NotJapanese)?;
        Ok(Explanation {
            original: japanese.to_string(),
            romaji: "ame ga furu".into(),
            ..Default::default()
        })
    }
}

pub(crate) fn screens_with(
    dictionary: Arc<FakeDictionary>,
    translator: Arc<FakeTranslator>,
) -> Screens {
    Screens::new(dictionary, translator, Arc::new(FakeExplainer))
}

pub(crate) fn screens() -> Screens {
    screens_with(
        Arc::new(FakeDictionary {
            entries: rain_entries(),
            ..Default::default()
        }),
        Arc::default(),
    )
}

pub(crate) fn entry(slug: &str, reading: &str, meaning: &str) -> Entry {
    Entry {
        slug: slug.into(),
        is_common: true,
        jlpt: Vec::new(),
        japanese: vec![JapaneseForm {
            word: Some(slug.into()),
            reading: reading.into(),
        }],
        senses: vec![Sense {
            english_definitions: vec![meaning.into()],
            parts_of_speech: vec!["Noun".into()],
        }],
    }
}

pub(crate) fn rain_entries() -> Vec<Entry> {
    vec![
        entry("雨", "あめ", "rain"),
        entry("雨天", "うてん", "rainy weather"),
        entry("大雨", "おおあめ", "heavy rain"),
    ]
}

pub(crate) fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub(crate) fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub(crate) fn shift(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::SHIFT))
}

pub(crate) fn typed(text: &str) -> impl Iterator<Item = Event> + '_ {
    text.chars().map(|c| key(KeyCode::Char(c)))
}

/// The one spawn a loading transition is paired with
pub(crate) fn single_spawn(effects: Vec<Effect>) -> (Ticket, TaskFuture) {
    let mut spawns: Vec<_> = effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Spawn { ticket, future } => Some((ticket, future)),
            Effect::Quit => None,
        })
        .collect();
    assert_eq!(spawns.len(), 1, "expected exactly one spawned task");
    spawns.remove(0)
}

/// Run the spawned task and feed its result back into the engine
pub(crate) async fn complete(engine: &mut Engine, effects: Vec<Effect>) -> Vec<Effect> {
    let (ticket, future) = single_spawn(effects);
    let transition = future.await;
    engine.dispatch(Event::Completed { ticket, transition })
}

pub(crate) fn feed(engine: &mut Engine, events: impl IntoIterator<Item = Event>) -> Vec<Effect> {
    events
        .into_iter()
        .flat_map(|event| engine.dispatch(event))
        .collect()
}
