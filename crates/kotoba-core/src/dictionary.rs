use kotoba_types::Entry;

/// Dictionary lookup capability
#[async_trait::async_trait]
pub trait DictionarySearch: Send + Sync {
    /// Search the dictionary for `keyword`, results in provider order
    async fn search(&self, keyword: &str) -> Result<Vec<Entry>, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("keyword cannot be empty")]
    EmptyKeyword,

    #[error("dictionary returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("decode response: {0}")]
    Decode(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
