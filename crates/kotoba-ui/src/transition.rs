use kotoba_core::{ExplainError, LookupError};
use kotoba_translator::TranslateError;
use kotoba_types::{Entry, Explanation, Translation};

/// A request to move the engine into another state, optionally carrying the
/// data the target screen needs.
#[derive(Debug)]
pub enum Transition {
    Menu,
    Search,
    Loading,
    DictionaryList(Vec<Entry>),
    /// Back to the list without touching its items or selection
    ReturnToDictionaryList,
    Detail(Box<Entry>),
    Translate,
    TranslateDetail(Vec<Translation>),
    Explainer,
    ExplainerDetail(Box<Explanation>),
    Error(TaskError),
}

/// Tag of a [`Transition`], used as the router table index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Menu,
    Search,
    Loading,
    DictionaryList,
    ReturnToDictionaryList,
    Detail,
    Translate,
    TranslateDetail,
    Explainer,
    ExplainerDetail,
    Error,
}

impl TransitionKind {
    pub const COUNT: usize = 11;

    pub const ALL: [TransitionKind; Self::COUNT] = [
        TransitionKind::Menu,
        TransitionKind::Search,
        TransitionKind::Loading,
        TransitionKind::DictionaryList,
        TransitionKind::ReturnToDictionaryList,
        TransitionKind::Detail,
        TransitionKind::Translate,
        TransitionKind::TranslateDetail,
        TransitionKind::Explainer,
        TransitionKind::ExplainerDetail,
        TransitionKind::Error,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Transition {
    pub fn kind(&self) -> TransitionKind {
        match self {
            Transition::Menu => TransitionKind::Menu,
            Transition::Search => TransitionKind::Search,
            Transition::Loading => TransitionKind::Loading,
            Transition::DictionaryList(_) => TransitionKind::DictionaryList,
            Transition::ReturnToDictionaryList => TransitionKind::ReturnToDictionaryList,
            Transition::Detail(_) => TransitionKind::Detail,
            Transition::Translate => TransitionKind::Translate,
            Transition::TranslateDetail(_) => TransitionKind::TranslateDetail,
            Transition::Explainer => TransitionKind::Explainer,
            Transition::ExplainerDetail(_) => TransitionKind::ExplainerDetail,
            Transition::Error(_) => TransitionKind::Error,
        }
    }
}

/// Why a screen or a spawned task gave up
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("dictionary lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("translation failed: {0}")]
    Translate(#[from] TranslateError),

    #[error("explanation failed: {0}")]
    Explain(#[from] ExplainError),

    #[error("{0}")]
    Invariant(String),
}
