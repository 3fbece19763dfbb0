use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::explainer::ExplainerConfig;
use self::logging::LoggingConfig;
use self::network::NetworkConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod explainer;
pub mod logging;
pub mod network;
pub mod translator;
pub mod ui;

pub use ui::StartScreen;

/// Reads one environment-style variable
pub(crate) type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingKey(&'static str),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub explainer: ExplainerConfig,
    pub dictionary: DictionaryConfig,
    pub network: NetworkConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Build the config from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(source: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = move |name: &str| source(name).filter(|v| !v.trim().is_empty());

        Ok(Config {
            translator: TranslatorConfig::from_lookup(&lookup)?,
            explainer: ExplainerConfig::from_lookup(&lookup)?,
            dictionary: DictionaryConfig::from_lookup(&lookup),
            network: NetworkConfig::from_lookup(&lookup),
            ui: UiConfig::from_lookup(&lookup),
            logging: LoggingConfig::from_lookup(&lookup),
        })
    }
}

pub(crate) fn required(lookup: &Lookup<'_>, name: &'static str) -> Result<String, ConfigError> {
    lookup(name).ok_or(ConfigError::MissingKey(name))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_keys_are_set() {
        let config =
            Config::from_lookup(source(&[("DEEPL_KEY", "dl"), ("DEEPSEEK_KEY", "ds")])).unwrap();

        assert_eq!(config.translator.api_key, "dl");
        assert_eq!(config.translator.api_url, "https://api.deepl.com/v2");
        assert_eq!(config.explainer.api_key, "ds");
        assert_eq!(config.explainer.max_tokens, 2888);
        assert_eq!(config.explainer.model, "deepseek-chat");
        assert_eq!(config.network.timeout_seconds, 5);
        assert_eq!(config.ui.start_screen, StartScreen::Menu);
        assert_eq!(config.ui.delta_time, 100);
        assert!(!config.logging.json);
        assert!(config.logging.file.ends_with("kotoba.log"));
    }

    #[test]
    fn missing_deepl_key_is_reported_by_name() {
        let err = Config::from_lookup(source(&[("DEEPSEEK_KEY", "ds")])).unwrap_err();
        assert_eq!(err.to_string(), "DEEPL_KEY is not set");
    }

    #[test]
    fn blank_deepseek_key_counts_as_missing() {
        let err =
            Config::from_lookup(source(&[("DEEPL_KEY", "dl"), ("DEEPSEEK_KEY", "  ")])).unwrap_err();
        assert_eq!(err.to_string(), "DEEPSEEK_KEY is not set");
    }

    #[test]
    fn overrides_are_parsed_and_bad_numbers_fall_back() {
        let config = Config::from_lookup(source(&[
            ("DEEPL_KEY", "dl"),
            ("DEEPSEEK_KEY", "ds"),
            ("START_SCREEN", "Search"),
            ("HTTP_TIMEOUT_SECONDS", "12"),
            ("DELTA_TIME_MS", "not-a-number"),
            ("KOTOBA_LOG_JSON", "true"),
            ("KOTOBA_LOG_FILE", "/tmp/k.log"),
        ]))
        .unwrap();

        assert_eq!(config.ui.start_screen, StartScreen::Search);
        assert_eq!(config.network.timeout_seconds, 12);
        assert_eq!(config.ui.delta_time, 100);
        assert!(config.logging.json);
        assert_eq!(config.logging.file, std::path::PathBuf::from("/tmp/k.log"));
    }
}
