use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Lookup;

/// `<cache dir>/kotoba/kotoba.log`, falling back to the temp dir
fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("kotoba")
        .join("kotoba.log")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub file: PathBuf,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let file = lookup("KOTOBA_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_log_file);

        let json = lookup("KOTOBA_LOG_JSON")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self { file, json }
    }
}
