use async_trait::async_trait;
use kotoba_core::preprocess::{DefaultPreprocessor, Preprocessor};
use kotoba_core::{ExplainError, Explainer};
use kotoba_types::Explanation;
use serde::{Deserialize, Serialize};

use crate::prompt::{SYSTEM_PROMPT, explain_prompt};
use crate::script::longest_japanese_run;

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    stream: bool,
    max_tokens: u32,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    finish_reason: Option<String>,
    message: Message,
}

/// DeepSeek chat backed sentence explainer
#[derive(Clone)]
pub struct JapaneseExplainer {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl JapaneseExplainer {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        api_url: String,
        model: String,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            client,
            api_key,
            api_url,
            model,
            max_tokens,
            temperature,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }

    fn build_request(&self, sentence: &str) -> ChatRequest<'_> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: explain_prompt(sentence),
                },
            ],
            stream: false,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }
}

/// The Japanese part of `input` the model should explain
pub(crate) fn extract_sentence(input: &str) -> Result<String, ExplainError> {
    let normalized = DefaultPreprocessor.process(input);
    longest_japanese_run(&normalized)
        .map(str::to_string)
        .ok_or(ExplainError::NotJapanese)
}

/// Pull the assistant message out of a chat completion body
pub(crate) fn completion_content(body: &str) -> Result<String, ExplainError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| ExplainError::Decode(e.to_string()))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ExplainError::NoChoices)?;

    match choice.finish_reason.as_deref() {
        Some("stop") => {}
        other => return Err(ExplainError::Unfinished(other.unwrap_or("none").to_string())),
    }

    if choice.message.content.trim().is_empty() {
        return Err(ExplainError::EmptyMessage);
    }

    Ok(choice.message.content)
}

pub(crate) fn parse_explanation(content: &str) -> Result<Explanation, ExplainError> {
    serde_json::from_str(content).map_err(|e| ExplainError::Decode(e.to_string()))
}

#[async_trait]
impl Explainer for JapaneseExplainer {
    async fn ask(&self, sentence: &str) -> Result<Explanation, ExplainError> {
        let japanese = extract_sentence(sentence)?;
        tracing::debug!(%japanese, "asking for explanation");

        let response = self
            .client
            .post(self.endpoint())
            .header("Accept", "application/json")
            .bearer_auth(&self.api_key)
            .json(&self.build_request(&japanese))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ExplainError::Status { status, body });
        }

        let body = response.text().await?;
        let content = completion_content(&body)?;
        let explanation = parse_explanation(&content)?;
        tracing::info!(
            original = %explanation.original,
            confidence = explanation.confidence.as_str(),
            "explanation received"
        );

        Ok(explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explainer() -> JapaneseExplainer {
        JapaneseExplainer::new(
            reqwest::Client::new(),
            "key".into(),
            "https://api.deepseek.com/".into(),
            "deepseek-chat".into(),
            2888,
            0.1,
        )
    }

    #[test]
    fn ascii_input_is_not_japanese() {
        assert!(matches!(
            extract_sentence("it is raining"),
            Err(ExplainError::NotJapanese)
        ));
    }

    #[test]
    fn extracts_japanese_out_of_mixed_input() {
        assert_eq!(
            extract_sentence("explain: 私はバカな男だ please").unwrap(),
            "私はバカな男だ"
        );
    }

    #[tokio::test]
    async fn ask_rejects_ascii_without_network() {
        let result = explainer().ask("hello there").await;
        assert!(matches!(result, Err(ExplainError::NotJapanese)));
    }

    #[test]
    fn request_shape_matches_chat_api() {
        let explainer = explainer();
        let request = serde_json::to_value(explainer.build_request("雨")).unwrap();

        assert_eq!(request["model"], "deepseek-chat");
        assert_eq!(request["stream"], false);
        assert_eq!(request["max_tokens"], 2888);
        assert_eq!(request["response_format"]["type"], "json_object");
        assert_eq!(request["messages"][0]["role"], "system");
        assert_eq!(request["messages"][1]["role"], "user");
        assert!(
            request["messages"][1]["content"]
                .as_str()
                .unwrap()
                .contains("\"雨\"")
        );
        assert_eq!(
            explainer.endpoint(),
            "https://api.deepseek.com/chat/completions"
        );
    }

    #[test]
    fn completion_requires_stop_reason() {
        let body = r#"{"choices": [{"finish_reason": "length", "index": 0, "message": {"role": "assistant", "content": "{}"}}]}"#;
        assert!(matches!(
            completion_content(body),
            Err(ExplainError::Unfinished(reason)) if reason == "length"
        ));
    }

    #[test]
    fn completion_without_choices_fails() {
        assert!(matches!(
            completion_content(r#"{"choices": []}"#),
            Err(ExplainError::NoChoices)
        ));
    }

    #[test]
    fn completion_content_decodes_into_explanation() {
        let body = r#"{"id": "x", "choices": [{"finish_reason": "stop", "index": 0, "message": {"role": "assistant", "content": "{\"original\": \"雨\", \"romaji\": \"ame\", \"confidence\": \"low\"}"}}]}"#;

        let content = completion_content(body).unwrap();
        let explanation = parse_explanation(&content).unwrap();
        assert_eq!(explanation.original, "雨");
        assert_eq!(explanation.romaji, "ame");
        assert_eq!(explanation.confidence, kotoba_types::Confidence::Low);
    }
}
