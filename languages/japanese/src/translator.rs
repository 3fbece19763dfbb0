use async_trait::async_trait;
use kotoba_translator::{ProviderMetadata, TargetLanguage, TranslateError, Translation, Translator};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a [String],
    target_lang: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

/// DeepL backed translator
#[derive(Clone)]
pub struct JapaneseTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl JapaneseTranslator {
    pub fn new(client: reqwest::Client, api_key: String, api_url: String) -> Self {
        Self {
            client,
            api_key,
            api_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/translate", self.api_url.trim_end_matches('/'))
    }
}

pub(crate) fn build_request(
    target: TargetLanguage,
    texts: &[String],
) -> Result<serde_json::Value, TranslateError> {
    if texts.iter().all(|t| t.trim().is_empty()) {
        return Err(TranslateError::EmptyInput);
    }

    serde_json::to_value(TranslateRequest {
        text: texts,
        target_lang: target.code(),
    })
    .map_err(|e| TranslateError::ApiError(format!("Failed to encode request: {}", e)))
}

pub(crate) fn parse_response(body: &str) -> Result<Vec<Translation>, TranslateError> {
    let response: TranslateResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::ApiError(format!("Failed to parse response: {}", e)))?;

    if response.translations.is_empty() {
        return Err(TranslateError::ApiError(
            "No translation in response".to_string(),
        ));
    }

    Ok(response.translations)
}

#[async_trait]
impl Translator for JapaneseTranslator {
    async fn translate(
        &self,
        target: TargetLanguage,
        texts: &[String],
    ) -> Result<Vec<Translation>, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let request = build_request(target, texts)?;

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::ApiError(format!("HTTP {}: {}", status, body)));
        }

        let body = response.text().await?;
        parse_response(&body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
            requires_api_key: true,
            free_tier_available: true,
        }
    }
}
