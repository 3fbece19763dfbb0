use serde::{Deserialize, Serialize};

use crate::{ConfigError, Lookup};

fn default_api_url() -> String {
    "https://api.deepl.com/v2".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    pub api_key: String,
    /// DeepL base URL, `/translate` is appended
    pub api_url: String,
}

impl TranslatorConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let api_key = crate::required(lookup, "DEEPL_KEY")?;
        let api_url = lookup("DEEPL_API_URL").unwrap_or_else(default_api_url);

        Ok(Self { api_key, api_url })
    }
}
