//! Core type definitions for provider selection and normalized output

use serde::{Deserialize, Serialize};

/// Fallback text substituted when a provider response carries no usable
/// message at the expected position.
pub const DEFAULT_GREETING: &str = "Hello as default";

/// Identifier for a supported LLM provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Google Gemini (generateContent API)
    Gemini,
    /// Groq (OpenAI-compatible chat completions)
    Groq,
    /// OpenAI (chat completions)
    OpenAi,
}

impl ProviderId {
    /// Wire identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Gemini => "gemini",
            ProviderId::Groq => "groq",
            ProviderId::OpenAi => "openai",
        }
    }

    /// Parse a selector value case-insensitively. Returns `None` for
    /// anything that is not one of the three known identifiers.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "gemini" => Some(ProviderId::Gemini),
            "groq" => Some(ProviderId::Groq),
            "openai" => Some(ProviderId::OpenAi),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized success output returned to the caller, provider-agnostic.
///
/// Constructed only from a successful provider response; `message` is
/// always a string, with [`DEFAULT_GREETING`] substituted when the raw
/// response had no usable text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    /// Always true on construction; kept in the wire shape for consumers.
    pub ok: bool,

    /// Provider that produced the message
    pub provider: ProviderId,

    /// Fixed model identifier used for the request
    pub model: String,

    /// Greeting text extracted from the provider response
    pub message: String,
}

impl Greeting {
    pub fn new(
        provider: ProviderId,
        model: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            ok: true,
            provider,
            model: model.into(),
            message: message.into(),
        }
    }
}
