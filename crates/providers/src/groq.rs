//! Groq provider (OpenAI-compatible chat completions)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::backend::{GreetingBackend, HELLO_PROMPT};
use hello_agent_core::{
    config::ProviderSettings, errors::ProviderError, Greeting, ProviderId, DEFAULT_GREETING,
};

/// Fixed model used for every Groq request.
pub const GROQ_MODEL: &str = "llama-3.1-8b-instant";

pub struct GroqProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GroqProvider {
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
impl GreetingBackend for GroqProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Groq
    }

    fn model(&self) -> &str {
        GROQ_MODEL
    }

    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn greet(&self) -> Result<Greeting, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential(ProviderId::Groq))?;

        let body = serde_json::json!({
            "model": GROQ_MODEL,
            "messages": [{ "role": "user", "content": HELLO_PROMPT }],
            "temperature": 0,
        });

        debug!("Groq request: model={}", GROQ_MODEL);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network {
                provider: ProviderId::Groq,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::RequestFailed {
                provider: ProviderId::Groq,
                status,
                body,
            });
        }

        let parsed: GroqResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::InvalidResponse {
                    provider: ProviderId::Groq,
                    message: e.to_string(),
                })?;

        Ok(Greeting::new(
            ProviderId::Groq,
            GROQ_MODEL,
            normalize_message(&parsed),
        ))
    }
}

fn normalize_message(response: &GroqResponse) -> String {
    match extract_content(response) {
        Some(content) => content.trim().to_string(),
        None => DEFAULT_GREETING.to_string(),
    }
}

fn extract_content(response: &GroqResponse) -> Option<&str> {
    response
        .choices
        .as_ref()?
        .first()?
        .message
        .as_ref()?
        .content
        .as_deref()
}

// Groq API types (chat-completion shape)

#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Option<Vec<GroqChoice>>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: Option<GroqMessage>,
}

#[derive(Debug, Deserialize)]
struct GroqMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>) -> ProviderSettings {
        ProviderSettings {
            api_key: api_key.map(String::from),
            base_url: "https://groq.invalid/openai/v1".to_string(),
        }
    }

    #[test]
    fn test_extracts_and_trims_first_choice() {
        let raw = r#"{"choices":[{"message":{"content":"  Good day, esteemed user.  "}}]}"#;
        let parsed: GroqResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(normalize_message(&parsed), "Good day, esteemed user.");
    }

    #[test]
    fn test_missing_fields_fall_back_to_default() {
        let cases = [
            "{}",
            r#"{"choices":[]}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
        ];
        for raw in cases {
            let parsed: GroqResponse = serde_json::from_str(raw).unwrap();
            assert_eq!(normalize_message(&parsed), DEFAULT_GREETING, "case: {raw}");
        }
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let provider = GroqProvider::new(&settings(None), Duration::from_secs(5));
        assert_eq!(provider.id(), ProviderId::Groq);
        assert_eq!(provider.model(), GROQ_MODEL);
        assert!(!provider.has_credentials());
        let err = provider.greet().await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::MissingCredential(ProviderId::Groq)
        ));
    }
}
