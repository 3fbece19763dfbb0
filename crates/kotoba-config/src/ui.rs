use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Lookup;

/// Screen shown at startup and after a failed request
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    #[default]
    Menu,
    Search,
}

impl FromStr for StartScreen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "menu" => Ok(StartScreen::Menu),
            "search" => Ok(StartScreen::Search),
            other => Err(format!("unknown start screen '{other}'")),
        }
    }
}

impl fmt::Display for StartScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartScreen::Menu => f.write_str("menu"),
            StartScreen::Search => f.write_str("search"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    pub start_screen: StartScreen,
    /// Tick interval driving the spinner and cursor blink
    pub delta_time: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_screen: StartScreen::Menu,
            delta_time: 100,
        }
    }
}

impl UiConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let start_screen = lookup("START_SCREEN")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let delta_time = lookup("DELTA_TIME_MS")
            .and_then(|v| v.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(100); // 100ms default

        Self {
            start_screen,
            delta_time,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.delta_time)
    }
}
