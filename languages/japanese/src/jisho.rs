use async_trait::async_trait;
use kotoba_core::{DictionarySearch, LookupError};
use kotoba_types::Entry;
use serde::Deserialize;

#[derive(Deserialize)]
struct JishoResponse {
    #[serde(default)]
    data: Vec<Entry>,
}

/// Jisho word search
#[derive(Clone)]
pub struct JishoClient {
    client: reqwest::Client,
    api_url: String,
}

impl JishoClient {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

/// Decode a Jisho search body into its entries, keeping API order
pub(crate) fn parse_response(body: &str) -> Result<Vec<Entry>, LookupError> {
    serde_json::from_str::<JishoResponse>(body)
        .map(|response| response.data)
        .map_err(|e| LookupError::Decode(e.to_string()))
}

#[async_trait]
impl DictionarySearch for JishoClient {
    async fn search(&self, keyword: &str) -> Result<Vec<Entry>, LookupError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(LookupError::EmptyKeyword);
        }

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("keyword", keyword)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let body = response.text().await?;
        let entries = parse_response(&body)?;
        tracing::debug!(keyword, hits = entries.len(), "jisho search finished");

        Ok(entries)
    }
}
