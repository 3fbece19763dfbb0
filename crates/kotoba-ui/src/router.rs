use crate::screens::Screens;
use crate::state::AppState;
use crate::task::Task;
use crate::transition::{TaskError, Transition, TransitionKind};

/// Applies a transition to the screens and names the state to commit.
/// The last argument is the home state used to recover from errors.
pub type Handler = fn(&mut Screens, Transition, AppState) -> (AppState, Task);

/// Fixed table from transition tag to handler
pub struct Router {
    handlers: [Option<Handler>; TransitionKind::COUNT],
}

impl Router {
    pub fn new() -> Self {
        Self {
            handlers: [None; TransitionKind::COUNT],
        }
    }

    /// Router with a handler for every transition
    pub fn with_default_routes() -> Self {
        let mut router = Self::new();
        router.register(TransitionKind::Menu, to_menu);
        router.register(TransitionKind::Search, to_search);
        router.register(TransitionKind::Loading, to_loading);
        router.register(TransitionKind::DictionaryList, to_dictionary_list);
        router.register(TransitionKind::ReturnToDictionaryList, back_to_dictionary_list);
        router.register(TransitionKind::Detail, to_detail);
        router.register(TransitionKind::Translate, to_translate);
        router.register(TransitionKind::TranslateDetail, to_translate_detail);
        router.register(TransitionKind::Explainer, to_explainer);
        router.register(TransitionKind::ExplainerDetail, to_explainer_detail);
        router.register(TransitionKind::Error, on_error);
        router
    }

    /// Last registration wins
    pub fn register(&mut self, kind: TransitionKind, handler: Handler) {
        if self.handlers[kind.index()].replace(handler).is_some() {
            tracing::warn!(?kind, "transition handler replaced");
        }
    }

    pub fn resolve(&self, transition: &Transition) -> Option<Handler> {
        self.handlers[transition.kind().index()]
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::with_default_routes()
    }
}

/// A handler got a transition it was not registered for
fn misrouted(expected: TransitionKind, got: Transition, home: AppState) -> (AppState, Task) {
    let error = TaskError::Invariant(format!(
        "{expected:?} handler received {:?}",
        got.kind()
    ));
    (home, Task::emit(Transition::Error(error)))
}

fn to_menu(_: &mut Screens, _: Transition, _: AppState) -> (AppState, Task) {
    (AppState::Menu, Task::none())
}

fn to_search(screens: &mut Screens, _: Transition, _: AppState) -> (AppState, Task) {
    screens.search.focus();
    (AppState::Search, Task::none())
}

fn to_loading(screens: &mut Screens, _: Transition, _: AppState) -> (AppState, Task) {
    screens.loading.start();
    (AppState::Loading, Task::none())
}

fn to_dictionary_list(screens: &mut Screens, t: Transition, home: AppState) -> (AppState, Task) {
    match t {
        Transition::DictionaryList(entries) => {
            screens.dictionary.set_items(entries);
            (AppState::DictionaryList, Task::none())
        }
        other => misrouted(TransitionKind::DictionaryList, other, home),
    }
}

fn back_to_dictionary_list(_: &mut Screens, _: Transition, _: AppState) -> (AppState, Task) {
    (AppState::DictionaryList, Task::none())
}

fn to_detail(screens: &mut Screens, t: Transition, home: AppState) -> (AppState, Task) {
    match t {
        Transition::Detail(entry) => {
            screens.detail.set_item(*entry);
            (AppState::Detail, Task::none())
        }
        other => misrouted(TransitionKind::Detail, other, home),
    }
}

fn to_translate(screens: &mut Screens, _: Transition, _: AppState) -> (AppState, Task) {
    screens.translator.focus();
    (AppState::Translate, Task::none())
}

fn to_translate_detail(screens: &mut Screens, t: Transition, home: AppState) -> (AppState, Task) {
    match t {
        Transition::TranslateDetail(translations) => {
            screens.translation_detail.set_items(translations);
            (AppState::TranslateDetail, Task::none())
        }
        other => misrouted(TransitionKind::TranslateDetail, other, home),
    }
}

fn to_explainer(screens: &mut Screens, _: Transition, _: AppState) -> (AppState, Task) {
    screens.explainer.focus();
    (AppState::Explainer, Task::none())
}

fn to_explainer_detail(screens: &mut Screens, t: Transition, home: AppState) -> (AppState, Task) {
    match t {
        Transition::ExplainerDetail(explanation) => {
            screens.explainer_detail.set_item(*explanation);
            (AppState::ExplainerDetail, Task::none())
        }
        other => misrouted(TransitionKind::ExplainerDetail, other, home),
    }
}

fn on_error(_: &mut Screens, t: Transition, home: AppState) -> (AppState, Task) {
    match t {
        Transition::Error(cause) => tracing::error!(error = %cause, "task failed"),
        other => tracing::error!(kind = ?other.kind(), "error handler received a non-error"),
    }
    (home, Task::none())
}
