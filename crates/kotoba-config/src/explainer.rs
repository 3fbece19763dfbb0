use serde::{Deserialize, Serialize};

use crate::{ConfigError, Lookup};

fn default_api_url() -> String {
    "https://api.deepseek.com".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_max_tokens() -> u32 {
    2888
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExplainerConfig {
    pub api_key: String,
    /// DeepSeek base URL, `/chat/completions` is appended
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ExplainerConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let api_key = crate::required(lookup, "DEEPSEEK_KEY")?;
        let api_url = lookup("DEEPSEEK_API_URL").unwrap_or_else(default_api_url);
        let model = lookup("DEEPSEEK_MODEL").unwrap_or_else(default_model);
        let max_tokens = lookup("EXPLAINER_MAX_TOKENS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_tokens);

        Ok(Self {
            api_key,
            api_url,
            model,
            max_tokens,
            temperature: 0.1,
        })
    }
}
