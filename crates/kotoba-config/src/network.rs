use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Lookup;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NetworkConfig {
    /// Per-request timeout shared by every HTTP client
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { timeout_seconds: 5 }
    }
}

impl NetworkConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let timeout_seconds = lookup("HTTP_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self { timeout_seconds }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
