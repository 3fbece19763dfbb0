use std::fmt;

/// Identifies the visible screen. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppState {
    Menu,
    Search,
    Loading,
    DictionaryList,
    Detail,
    Translate,
    TranslateDetail,
    Explainer,
    ExplainerDetail,
}

impl AppState {
    pub fn name(&self) -> &'static str {
        match self {
            AppState::Menu => "menu",
            AppState::Search => "search",
            AppState::Loading => "loading",
            AppState::DictionaryList => "dictionary-list",
            AppState::Detail => "detail",
            AppState::Translate => "translate",
            AppState::TranslateDetail => "translate-detail",
            AppState::Explainer => "explainer",
            AppState::ExplainerDetail => "explainer-detail",
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
