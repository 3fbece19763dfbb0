//! Screen models, one per [`AppState`].

mod detail;
mod dictionary;
mod explainer;
mod explainer_detail;
mod loading;
mod menu;
mod search;
mod translation_detail;
mod translator;

pub use detail::DetailScreen;
pub use dictionary::DictionaryScreen;
pub use explainer::ExplainerScreen;
pub use explainer_detail::ExplainerDetailScreen;
pub use loading::LoadingScreen;
pub use menu::{MenuChoice, MenuScreen};
pub use search::SearchScreen;
pub use translation_detail::TranslationDetailScreen;
pub use translator::TranslatorScreen;

use std::sync::Arc;

use crossterm::event::KeyEvent;
use kotoba_core::{DictionarySearch, Explainer};
use kotoba_translator::Translator;
use ratatui::text::{Line, Text};

use crate::event::Event;
use crate::keys::Keymap;
use crate::render;
use crate::state::AppState;
use crate::task::Task;
use crate::theme;
use crate::widgets::Viewport;

/// A self-contained screen model.
///
/// `update` mutates in place and may hand work back to the engine. `view`
/// must not change anything, rendering twice gives the same text.
pub trait Screen {
    fn init(&mut self) -> Task {
        Task::none()
    }

    fn update(&mut self, event: &Event) -> Task;

    fn view(&self) -> Text<'static>;
}

/// Every screen model, created once and kept for the whole session
pub struct Screens {
    pub menu: MenuScreen,
    pub search: SearchScreen,
    pub loading: LoadingScreen,
    pub dictionary: DictionaryScreen,
    pub detail: DetailScreen,
    pub translator: TranslatorScreen,
    pub translation_detail: TranslationDetailScreen,
    pub explainer: ExplainerScreen,
    pub explainer_detail: ExplainerDetailScreen,
}

impl Screens {
    pub fn new(
        dictionary: Arc<dyn DictionarySearch>,
        translator: Arc<dyn Translator>,
        explainer: Arc<dyn Explainer>,
    ) -> Self {
        Self {
            menu: MenuScreen::new(),
            search: SearchScreen::new(dictionary),
            loading: LoadingScreen::default(),
            dictionary: DictionaryScreen::new(),
            detail: DetailScreen::default(),
            translator: TranslatorScreen::new(translator),
            translation_detail: TranslationDetailScreen::default(),
            explainer: ExplainerScreen::new(explainer),
            explainer_detail: ExplainerDetailScreen::default(),
        }
    }

    pub fn get(&self, state: AppState) -> &dyn Screen {
        match state {
            AppState::Menu => &self.menu,
            AppState::Search => &self.search,
            AppState::Loading => &self.loading,
            AppState::DictionaryList => &self.dictionary,
            AppState::Detail => &self.detail,
            AppState::Translate => &self.translator,
            AppState::TranslateDetail => &self.translation_detail,
            AppState::Explainer => &self.explainer,
            AppState::ExplainerDetail => &self.explainer_detail,
        }
    }

    pub fn get_mut(&mut self, state: AppState) -> &mut dyn Screen {
        match state {
            AppState::Menu => &mut self.menu,
            AppState::Search => &mut self.search,
            AppState::Loading => &mut self.loading,
            AppState::DictionaryList => &mut self.dictionary,
            AppState::Detail => &mut self.detail,
            AppState::Translate => &mut self.translator,
            AppState::TranslateDetail => &mut self.translation_detail,
            AppState::Explainer => &mut self.explainer,
            AppState::ExplainerDetail => &mut self.explainer_detail,
        }
    }
}

/// Question line, blank line, body, blank line, muted key hints
pub(crate) fn layout(title: impl Into<String>, body: Vec<Line<'static>>, hints: &str) -> Text<'static> {
    let mut lines = vec![
        Line::default(),
        Line::styled(title.into(), theme::TEXT),
        Line::default(),
    ];
    lines.extend(body);
    lines.push(Line::default());
    lines.push(render::footnote(hints));
    Text::from(lines)
}

/// Viewer scrolling shared by the passive detail screens
pub(crate) fn scroll(viewport: &mut Viewport, key: &KeyEvent) {
    const PAGE: usize = 10;

    if Keymap::is_up(key) {
        viewport.scroll_up(1);
    } else if Keymap::is_down(key) {
        viewport.scroll_down(1);
    } else if Keymap::PAGE_UP.matches(key) {
        viewport.scroll_up(PAGE);
    } else if Keymap::PAGE_DOWN.matches(key) {
        viewport.scroll_down(PAGE);
    }
}
