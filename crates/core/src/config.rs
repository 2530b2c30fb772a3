//! Configuration loaded once from the environment
//!
//! Adapters never read environment variables themselves; everything they
//! need is captured here at startup and passed in explicitly.

use std::sync::Once;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

static ENV_LOADED: Once = Once::new();

/// Load a `.env` file into the process environment, if one exists.
/// Repeat calls are no-ops.
pub fn load_env() {
    ENV_LOADED.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

/// Connection settings for a single provider.
#[derive(Clone, Debug)]
pub struct ProviderSettings {
    /// API key; adapters fail with `MissingCredential` when absent.
    pub api_key: Option<String>,

    /// Base URL, overridable for tests and self-hosted gateways.
    pub base_url: String,
}

/// Configuration for one invocation.
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Raw forced-provider selector (`PROVIDER`); validated by the router
    /// so an unknown value can be reported with the offending text.
    pub forced_provider: Option<String>,

    pub gemini: ProviderSettings,
    pub groq: ProviderSettings,
    pub openai: ProviderSettings,

    /// Timeout applied to each outbound request.
    pub request_timeout: Duration,
}

impl AgentConfig {
    /// Read configuration from environment variables.
    ///
    /// Keys: `GOOGLE_API_KEY`, `GROQ_API_KEY`, `OPENAI_API_KEY`.
    /// Selector: `PROVIDER` (case-insensitive, `openai|gemini|groq`).
    /// Overrides: `GEMINI_BASE_URL`, `GROQ_BASE_URL`, `OPENAI_BASE_URL`,
    /// `HELLO_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self {
            forced_provider: non_empty_var("PROVIDER"),
            gemini: ProviderSettings {
                api_key: non_empty_var("GOOGLE_API_KEY"),
                base_url: std::env::var("GEMINI_BASE_URL")
                    .unwrap_or_else(|_| GEMINI_BASE_URL.to_string()),
            },
            groq: ProviderSettings {
                api_key: non_empty_var("GROQ_API_KEY"),
                base_url: std::env::var("GROQ_BASE_URL")
                    .unwrap_or_else(|_| GROQ_BASE_URL.to_string()),
            },
            openai: ProviderSettings {
                api_key: non_empty_var("OPENAI_API_KEY"),
                base_url: std::env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| OPENAI_BASE_URL.to_string()),
            },
            request_timeout: Duration::from_secs(
                std::env::var("HELLO_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }
}

/// An empty variable counts as unset.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
