use std::process::ExitCode;
use std::sync::Arc;

use kotoba_config::{Config, StartScreen};
use kotoba_lang_japanese::{JapaneseExplainer, JapaneseTranslator, JishoClient};
use kotoba_translator::Translator;
use kotoba_ui::{AppState, Engine, Screens};

use self::controller::AppController;

mod controller;
mod logging;
mod terminal;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> ExitCode {
    if let Some(e) = env_file_error(dotenvy::dotenv()) {
        eprintln!("failed to load .env: {e}");
        return ExitCode::FAILURE;
    }

    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("logging disabled: {e}");
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("kotoba exited: {e:#}");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// A missing .env file is fine, the variables may come from the shell
fn env_file_error<T>(loaded: dotenvy::Result<T>) -> Option<dotenvy::Error> {
    match loaded {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        anyhow::bail!("kotoba needs an interactive terminal");
    }

    let engine = build_engine(&config)?;
    tracing::info!(home = %engine.home(), "starting");

    let controller = AppController::new(config.ui.tick_interval());
    let mut terminal = terminal::init()?;
    let result = controller.run(&mut terminal, engine).await;
    terminal::restore(&mut terminal)?;

    tracing::info!("bye");
    result
}

fn build_engine(config: &Config) -> anyhow::Result<Engine> {
    let client = reqwest::Client::builder()
        .timeout(config.network.timeout())
        .build()?;

    let dictionary = Arc::new(JishoClient::new(
        client.clone(),
        config.dictionary.api_url.clone(),
    ));
    let translator = Arc::new(JapaneseTranslator::new(
        client.clone(),
        config.translator.api_key.clone(),
        config.translator.api_url.clone(),
    ));
    let explainer = Arc::new(JapaneseExplainer::new(
        client,
        config.explainer.api_key.clone(),
        config.explainer.api_url.clone(),
        config.explainer.model.clone(),
        config.explainer.max_tokens,
        config.explainer.temperature,
    ));

    let metadata = translator.metadata();
    tracing::info!(
        provider = %metadata.name,
        requires_api_key = metadata.requires_api_key,
        free_tier = metadata.free_tier_available,
        "translator ready"
    );

    let screens = Screens::new(dictionary, translator, explainer);
    Ok(Engine::new(screens, home_state(config.ui.start_screen)))
}

fn home_state(start: StartScreen) -> AppState {
    match start {
        StartScreen::Menu => AppState::Menu,
        StartScreen::Search => AppState::Search,
    }
}
