//! Google Gemini provider (generateContent API)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backend::{GreetingBackend, HELLO_PROMPT};
use hello_agent_core::{
    config::ProviderSettings, errors::ProviderError, Greeting, ProviderId, DEFAULT_GREETING,
};

/// Fixed model used for every Gemini request.
pub const GEMINI_MODEL: &str = "gemini-2.0-flash-lite";

pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiProvider {
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
impl GreetingBackend for GeminiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn model(&self) -> &str {
        GEMINI_MODEL
    }

    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn greet(&self) -> Result<Greeting, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential(ProviderId::Gemini))?;

        // Gemini authenticates with the key in the URL query, not a header.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, api_key
        );

        let body = GenerateContentRequest {
            contents: vec![ContentPayload {
                parts: vec![TextPart {
                    text: HELLO_PROMPT.to_string(),
                }],
            }],
        };

        debug!("Gemini request: model={}", GEMINI_MODEL);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network {
                provider: ProviderId::Gemini,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::RequestFailed {
                provider: ProviderId::Gemini,
                status,
                body,
            });
        }

        let parsed: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::InvalidResponse {
                    provider: ProviderId::Gemini,
                    message: e.to_string(),
                })?;

        Ok(Greeting::new(
            ProviderId::Gemini,
            GEMINI_MODEL,
            normalize_message(&parsed),
        ))
    }
}

fn normalize_message(response: &GenerateContentResponse) -> String {
    match extract_text(response) {
        Some(text) => text.to_string(),
        None => DEFAULT_GREETING.to_string(),
    }
}

/// First candidate's first part, if every link in the chain is present.
fn extract_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .as_ref()?
        .first()?
        .content
        .as_ref()?
        .parts
        .as_ref()?
        .first()?
        .text
        .as_deref()
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<ContentPayload>,
}

#[derive(Debug, Serialize)]
struct ContentPayload {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>) -> ProviderSettings {
        ProviderSettings {
            api_key: api_key.map(String::from),
            base_url: "https://gemini.invalid/v1beta".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![ContentPayload {
                parts: vec![TextPart {
                    text: HELLO_PROMPT.to_string(),
                }],
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], HELLO_PROMPT);
    }

    #[test]
    fn test_extracts_first_candidate_text() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Good day to you."}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(normalize_message(&parsed), "Good day to you.");
    }

    #[test]
    fn test_missing_fields_fall_back_to_default() {
        let cases = [
            "{}",
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{}}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{}]}}]}"#,
        ];
        for raw in cases {
            let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
            assert_eq!(normalize_message(&parsed), DEFAULT_GREETING, "case: {raw}");
        }
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let provider = GeminiProvider::new(&settings(None), Duration::from_secs(5));
        assert_eq!(provider.id(), ProviderId::Gemini);
        assert_eq!(provider.model(), GEMINI_MODEL);
        assert!(!provider.has_credentials());
        let err = provider.greet().await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::MissingCredential(ProviderId::Gemini)
        ));
    }
}
