use std::sync::Arc;

use crossterm::event::KeyCode;

use super::fakes::*;
use crate::engine::Engine;
use crate::event::Event;
use crate::router::Router;
use crate::screens::Screens;
use crate::state::AppState;
use crate::task::{Effect, Task};
use crate::transition::{TaskError, Transition, TransitionKind};

const ALL_STATES: [AppState; 9] = [
    AppState::Menu,
    AppState::Search,
    AppState::Loading,
    AppState::DictionaryList,
    AppState::Detail,
    AppState::Translate,
    AppState::TranslateDetail,
    AppState::Explainer,
    AppState::ExplainerDetail,
];

/// Engine parked in `state` through the router, with data loaded where the
/// screen shows any
fn engine_in(state: AppState) -> Engine {
    let mut engine = Engine::new(screens(), AppState::Menu);
    let transition = match state {
        AppState::Menu => Transition::Menu,
        AppState::Search => Transition::Search,
        AppState::Loading => Transition::Loading,
        AppState::DictionaryList => Transition::DictionaryList(rain_entries()),
        AppState::Detail => Transition::Detail(Box::new(rain_entries().remove(0))),
        AppState::Translate => Transition::Translate,
        AppState::TranslateDetail => Transition::TranslateDetail(Vec::new()),
        AppState::Explainer => Transition::Explainer,
        AppState::ExplainerDetail => Transition::ExplainerDetail(Box::default()),
    };
    engine.dispatch(Event::Transition(transition));
    assert_eq!(engine.state(), state);
    engine
}

#[test]
fn starts_on_the_home_screen() {
    assert_eq!(Engine::new(screens(), AppState::Menu).state(), AppState::Menu);
    assert_eq!(
        Engine::new(screens(), AppState::Search).state(),
        AppState::Search
    );
}

#[test]
fn init_schedules_nothing() {
    let mut engine = Engine::new(screens(), AppState::Search);
    assert!(engine.init().is_empty());
}

#[test]
fn view_is_idempotent_on_every_screen() {
    for state in ALL_STATES {
        let engine = engine_in(state);
        assert_eq!(engine.render(), engine.render(), "{state} rendered differently");
    }
}

#[test]
fn quit_keys_win_on_every_screen() {
    for state in ALL_STATES {
        let mut engine = engine_in(state);
        for quit in [key(KeyCode::Esc), ctrl('c')] {
            let effects = engine.dispatch(quit);
            assert!(matches!(effects.as_slice(), [Effect::Quit]), "{state}");
            assert_eq!(engine.state(), state);
        }
    }
}

#[test]
fn state_is_the_last_handler_result() {
    let mut engine = Engine::new(screens(), AppState::Menu);
    let steps = [
        (Transition::Search, AppState::Search),
        (Transition::Translate, AppState::Translate),
        (Transition::Explainer, AppState::Explainer),
        (Transition::DictionaryList(rain_entries()), AppState::DictionaryList),
        (Transition::ReturnToDictionaryList, AppState::DictionaryList),
        (Transition::TranslateDetail(Vec::new()), AppState::TranslateDetail),
        (Transition::Menu, AppState::Menu),
    ];

    for (transition, expected) in steps {
        engine.dispatch(Event::Transition(transition));
        assert_eq!(engine.state(), expected);
    }
}

#[test]
fn input_screens_accept_their_own_transition_again() {
    for (transition, state) in [
        (Transition::Search, AppState::Search),
        (Transition::Translate, AppState::Translate),
        (Transition::Explainer, AppState::Explainer),
    ] {
        let mut engine = engine_in(state);
        assert!(engine.dispatch(Event::Transition(transition)).is_empty());
        assert_eq!(engine.state(), state);
    }
}

#[test]
fn error_returns_home() {
    for home in [AppState::Menu, AppState::Search] {
        let mut engine = Engine::new(screens(), home);
        engine.dispatch(Event::Transition(Transition::Translate));

        let error = TaskError::Invariant("lost".into());
        engine.dispatch(Event::Transition(Transition::Error(error)));
        assert_eq!(engine.state(), home);
    }
}

#[test]
fn entering_loading_awaits_exactly_one_task() {
    let mut engine = engine_in(AppState::Search);
    feed(&mut engine, typed("rain"));
    let effects = engine.dispatch(key(KeyCode::Enter));

    assert_eq!(engine.state(), AppState::Loading);
    let (ticket, _future) = single_spawn(effects);
    assert_eq!(engine.awaiting(), Some(ticket));
}

#[test]
fn empty_query_is_a_local_no_op() {
    let mut engine = engine_in(AppState::Search);
    feed(&mut engine, typed("   "));
    assert!(engine.dispatch(key(KeyCode::Enter)).is_empty());
    assert_eq!(engine.state(), AppState::Search);
}

#[tokio::test]
async fn stale_completions_are_dropped() {
    let mut engine = engine_in(AppState::Search);
    feed(&mut engine, typed("rain"));
    let (first, future) = single_spawn(engine.dispatch(key(KeyCode::Enter)));

    let late = future.await;
    let effects = engine.dispatch(Event::Completed {
        ticket: first + 41,
        transition: late,
    });

    assert!(effects.is_empty());
    assert_eq!(engine.state(), AppState::Loading);
    assert_eq!(engine.awaiting(), Some(first));
}

#[tokio::test]
async fn a_completion_is_accepted_once() {
    let mut engine = engine_in(AppState::Search);
    feed(&mut engine, typed("rain"));
    let (ticket, future) = single_spawn(engine.dispatch(key(KeyCode::Enter)));

    engine.dispatch(Event::Completed {
        ticket,
        transition: future.await,
    });
    assert_eq!(engine.state(), AppState::DictionaryList);
    assert_eq!(engine.awaiting(), None);

    engine.dispatch(Event::Completed {
        ticket,
        transition: Transition::Menu,
    });
    assert_eq!(engine.state(), AppState::DictionaryList);
}

#[test]
fn tickets_increase_with_every_spawn() {
    let mut engine = engine_in(AppState::Search);

    feed(&mut engine, typed("雨"));
    let (first, _) = single_spawn(engine.dispatch(key(KeyCode::Enter)));

    engine.dispatch(Event::Transition(Transition::Search));
    feed(&mut engine, typed("雪"));
    let (second, _) = single_spawn(engine.dispatch(key(KeyCode::Enter)));

    assert!(second > first);
    assert_eq!(engine.awaiting(), Some(second));
}

#[test]
fn unrouted_transitions_reach_the_active_screen() {
    let mut engine = Engine::with_router(screens(), AppState::Menu, Router::new());
    let effects = engine.dispatch(Event::Transition(Transition::Search));

    assert!(effects.is_empty());
    assert_eq!(engine.state(), AppState::Menu);
}

fn always_explainer(_: &mut Screens, _: Transition, _: AppState) -> (AppState, Task) {
    (AppState::Explainer, Task::none())
}

#[test]
fn replaced_route_takes_effect() {
    let mut router = Router::with_default_routes();
    router.register(TransitionKind::Search, always_explainer);

    let mut engine = Engine::with_router(screens(), AppState::Menu, router);
    engine.dispatch(Event::Transition(Transition::Search));
    assert_eq!(engine.state(), AppState::Explainer);
}

#[test]
fn screens_only_see_events_while_active() {
    let dictionary = Arc::new(FakeDictionary::default());
    let mut engine = Engine::new(
        screens_with(dictionary.clone(), Arc::default()),
        AppState::Menu,
    );

    feed(&mut engine, typed("rain"));
    assert!(engine.screens().search.input().value().is_empty());
    assert!(engine.screens().explainer.input().value().is_empty());
}

#[test]
fn tick_advances_only_the_loading_spinner_on_loading() {
    let mut engine = engine_in(AppState::Loading);
    engine.dispatch(Event::Tick);
    assert_eq!(engine.screens().loading.frame(), 1);

    engine.dispatch(Event::Transition(Transition::Loading));
    assert_eq!(engine.screens().loading.frame(), 0);
}

#[test]
fn resize_changes_nothing() {
    let mut engine = engine_in(AppState::DictionaryList);
    let before = engine.render();
    let effects = engine.dispatch(Event::Resize {
        width: 120,
        height: 40,
    });
    assert!(effects.is_empty());
    assert_eq!(engine.render(), before);
}
