use std::fmt;

use serde::{Deserialize, Serialize};

pub use kotoba_types::Translation;

/// Languages the translator screen can target, in selector order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    Japanese,
    English,
    Indonesian,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 3] = [
        TargetLanguage::Japanese,
        TargetLanguage::English,
        TargetLanguage::Indonesian,
    ];

    /// DeepL `target_lang` code
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::Japanese => "JA",
            TargetLanguage::English => "EN",
            TargetLanguage::Indonesian => "ID",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::Japanese => "Japanese",
            TargetLanguage::English => "English",
            TargetLanguage::Indonesian => "Indonesian",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate every text into `target`, letting the provider detect the
    /// source language
    async fn translate(
        &self,
        target: TargetLanguage,
        texts: &[String],
    ) -> Result<Vec<Translation>, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("text cannot be empty")]
    EmptyInput,

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
