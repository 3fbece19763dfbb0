use kotoba_types::Explanation;

/// Sentence explanation capability
#[async_trait::async_trait]
pub trait Explainer: Send + Sync {
    /// Explain the Japanese part of `sentence`.
    ///
    /// Implementations reject input without any Japanese script with
    /// [`ExplainError::NotJapanese`].
    async fn ask(&self, sentence: &str) -> Result<Explanation, ExplainError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    #[error("invalid japanese sentence")]
    NotJapanese,

    #[error("explainer returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("no choices")]
    NoChoices,

    #[error("unexpected finish reason '{0}'")]
    Unfinished(String),

    #[error("no message")]
    EmptyMessage,

    #[error("decode explanation: {0}")]
    Decode(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
