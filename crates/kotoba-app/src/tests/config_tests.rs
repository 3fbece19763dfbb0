use kotoba_config::{Config, StartScreen};
use kotoba_ui::AppState;

use crate::{build_engine, env_file_error, home_state};

fn config(start: &str) -> Config {
    Config::from_lookup(|name| match name {
        "DEEPL_KEY" => Some("dl".into()),
        "DEEPSEEK_KEY" => Some("ds".into()),
        "START_SCREEN" => Some(start.into()),
        _ => None,
    })
    .unwrap()
}

#[test]
fn start_screen_picks_home_state() {
    assert_eq!(home_state(StartScreen::Menu), AppState::Menu);
    assert_eq!(home_state(StartScreen::Search), AppState::Search);
}

#[test]
fn engine_starts_on_configured_screen() {
    let engine = build_engine(&config("search")).unwrap();
    assert_eq!(engine.state(), AppState::Search);
    assert_eq!(engine.home(), AppState::Search);

    let engine = build_engine(&config("menu")).unwrap();
    assert_eq!(engine.state(), AppState::Menu);
}

#[test]
fn missing_env_file_is_not_an_error() {
    let dir = std::env::temp_dir().join("kotoba_no_env_here");
    assert!(env_file_error(dotenvy::from_path(dir.join(".env"))).is_none());
}

#[test]
fn malformed_env_file_is_reported() {
    let dir = std::env::temp_dir().join("kotoba_bad_env");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(".env");
    std::fs::write(&path, "KOTOBA_BROKEN_VALUE=\"unterminated\n").unwrap();

    let error = env_file_error(dotenvy::from_path(&path));
    assert!(matches!(error, Some(dotenvy::Error::LineParse(..))));

    let _ = std::fs::remove_dir_all(&dir);
}
