//! Error types for provider invocation and dispatch

use thiserror::Error;

use crate::types::ProviderId;

/// Errors raised by a single provider adapter
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0} API key is not present")]
    MissingCredential(ProviderId),

    #[error("{provider} request failed with status {status}: {body}")]
    RequestFailed {
        provider: ProviderId,
        status: u16,
        body: String,
    },

    #[error("{provider} network error: {message}")]
    Network {
        provider: ProviderId,
        message: String,
    },

    #[error("{provider} returned an invalid response: {message}")]
    InvalidResponse {
        provider: ProviderId,
        message: String,
    },
}

/// Errors raised by the provider router
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("unsupported provider {value:?}, use one of: openai, gemini, groq")]
    UnsupportedProvider { value: String },

    #[error("no provider configured{}", render_attempts(.attempts))]
    NoProviderConfigured {
        /// Per-provider failures recorded while probing, in probe order.
        attempts: Vec<(ProviderId, ProviderError)>,
    },

    /// Forced-selection failures propagate the adapter error verbatim.
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

fn render_attempts(attempts: &[(ProviderId, ProviderError)]) -> String {
    if attempts.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = attempts
        .iter()
        .map(|(provider, err)| format!("{provider}: {err}"))
        .collect();
    format!(" (attempted {})", parts.join("; "))
}
