//! OpenAI provider (chat completions)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::backend::{GreetingBackend, HELLO_PROMPT};
use hello_agent_core::{
    config::ProviderSettings, errors::ProviderError, Greeting, ProviderId, DEFAULT_GREETING,
};

/// Fixed model used for every OpenAI request.
pub const OPENAI_MODEL: &str = "gpt-4o-mini";

pub struct OpenAiProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(settings: &ProviderSettings, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("failed to build HTTP client"),
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GreetingBackend for OpenAiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    fn model(&self) -> &str {
        OPENAI_MODEL
    }

    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn greet(&self) -> Result<Greeting, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential(ProviderId::OpenAi))?;

        let body = serde_json::json!({
            "model": OPENAI_MODEL,
            "messages": [{ "role": "user", "content": HELLO_PROMPT }],
            "temperature": 0,
        });

        debug!("OpenAI request: model={}", OPENAI_MODEL);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network {
                provider: ProviderId::OpenAi,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::RequestFailed {
                provider: ProviderId::OpenAi,
                status,
                body,
            });
        }

        let parsed: OpenAiResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::InvalidResponse {
                    provider: ProviderId::OpenAi,
                    message: e.to_string(),
                })?;

        Ok(Greeting::new(
            ProviderId::OpenAi,
            OPENAI_MODEL,
            normalize_message(&parsed),
        ))
    }
}

fn normalize_message(response: &OpenAiResponse) -> String {
    match extract_content(response) {
        Some(content) => content.trim().to_string(),
        None => DEFAULT_GREETING.to_string(),
    }
}

fn extract_content(response: &OpenAiResponse) -> Option<&str> {
    response
        .choices
        .as_ref()?
        .first()?
        .message
        .as_ref()?
        .content
        .as_deref()
}

// OpenAI API types

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Option<Vec<OpenAiChoice>>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: Option<OpenAiMessage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>) -> ProviderSettings {
        ProviderSettings {
            api_key: api_key.map(String::from),
            base_url: "https://openai.invalid/v1".to_string(),
        }
    }

    #[test]
    fn test_request_uses_chat_completion_fields() {
        let body = serde_json::json!({
            "model": OPENAI_MODEL,
            "messages": [{ "role": "user", "content": HELLO_PROMPT }],
            "temperature": 0,
        });
        assert!(body["messages"].is_array());
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], HELLO_PROMPT);
        assert_eq!(body["temperature"], 0);
        assert!(body.get("message").is_none());
    }

    #[test]
    fn test_extracts_and_trims_first_choice() {
        let raw = r#"{"choices":[{"message":{"content":"Good day.\n"}}]}"#;
        let parsed: OpenAiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(normalize_message(&parsed), "Good day.");
    }

    #[test]
    fn test_missing_fields_fall_back_to_default() {
        let cases = [
            "{}",
            r#"{"choices":[]}"#,
            r#"{"choices":[{"message":{}}]}"#,
        ];
        for raw in cases {
            let parsed: OpenAiResponse = serde_json::from_str(raw).unwrap();
            assert_eq!(normalize_message(&parsed), DEFAULT_GREETING, "case: {raw}");
        }
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let provider = OpenAiProvider::new(&settings(None), Duration::from_secs(5));
        assert_eq!(provider.id(), ProviderId::OpenAi);
        assert_eq!(provider.model(), OPENAI_MODEL);
        assert!(!provider.has_credentials());
        let err = provider.greet().await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::MissingCredential(ProviderId::OpenAi)
        ));
    }
}
