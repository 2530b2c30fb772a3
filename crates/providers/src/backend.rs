//! Backend trait shared by all provider adapters

use async_trait::async_trait;
use hello_agent_core::{errors::ProviderError, Greeting, ProviderId};

/// The single fixed prompt sent to every provider.
pub const HELLO_PROMPT: &str = "Greet the user formally";

/// A provider capable of producing one formal greeting.
#[async_trait]
pub trait GreetingBackend: Send + Sync {
    /// Stable identifier for this provider.
    fn id(&self) -> ProviderId;

    /// Fixed model identifier used for requests.
    fn model(&self) -> &str;

    /// Whether an API key is configured. The router skips providers
    /// without credentials during auto-discovery.
    fn has_credentials(&self) -> bool;

    /// Perform one request and map the response into a [`Greeting`].
    ///
    /// Exactly one outbound call; retries and fallback belong to the
    /// router. Fails with `MissingCredential` before any network I/O when
    /// no API key is configured.
    async fn greet(&self) -> Result<Greeting, ProviderError>;
}
