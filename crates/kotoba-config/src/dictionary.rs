use serde::{Deserialize, Serialize};

use crate::Lookup;

fn default_api_url() -> String {
    "https://jisho.org/api/v1/search/words".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl DictionaryConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        Self {
            api_url: lookup("JISHO_API_URL").unwrap_or_else(default_api_url),
        }
    }
}
