//! Provider router: forced selection and auto-discovery fallback
//!
//! Selection policy, evaluated in order:
//!
//! 1. **Forced selection**: a selector value (the `PROVIDER` variable) pins
//!    exactly one provider; its result or error is returned as-is, with no
//!    fallback. An unrecognized value is rejected before any network call.
//! 2. **Auto-discovery**: providers are probed in fixed priority order
//!    (Gemini, then Groq, then OpenAI). Providers without an API key are
//!    skipped; the first probe that succeeds wins. Probe failures advance
//!    the chain and are kept for the exhaustion report.
//! 3. **Exhaustion**: when nothing succeeded, the error carries the full
//!    (provider, error) trail recorded while probing.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::backend::GreetingBackend;
use crate::{GeminiProvider, GroqProvider, OpenAiProvider};
use hello_agent_core::{
    config::AgentConfig,
    errors::{DispatchError, ProviderError},
    Greeting, ProviderId,
};

pub struct ProviderRouter {
    forced: Option<String>,
    chain: Vec<Arc<dyn GreetingBackend>>,
}

impl ProviderRouter {
    /// Build the three real adapters from configuration, in priority order.
    pub fn from_config(config: &AgentConfig) -> Self {
        let chain: Vec<Arc<dyn GreetingBackend>> = vec![
            Arc::new(GeminiProvider::new(&config.gemini, config.request_timeout)),
            Arc::new(GroqProvider::new(&config.groq, config.request_timeout)),
            Arc::new(OpenAiProvider::new(&config.openai, config.request_timeout)),
        ];
        Self {
            forced: config.forced_provider.clone(),
            chain,
        }
    }

    /// Router over arbitrary backends, in the given probe order.
    pub fn with_backends(
        forced: Option<String>,
        chain: Vec<Arc<dyn GreetingBackend>>,
    ) -> Self {
        Self { forced, chain }
    }

    /// Select a provider per policy and return one normalized greeting.
    pub async fn select_and_greet(&self) -> Result<Greeting, DispatchError> {
        if let Some(raw) = &self.forced {
            let id = ProviderId::parse(raw).ok_or_else(|| DispatchError::UnsupportedProvider {
                value: raw.clone(),
            })?;
            let backend = self
                .chain
                .iter()
                .find(|backend| backend.id() == id)
                .ok_or_else(|| DispatchError::UnsupportedProvider { value: raw.clone() })?;

            debug!("forced provider selected: {id}");
            return Ok(backend.greet().await?);
        }

        let mut attempts: Vec<(ProviderId, ProviderError)> = Vec::new();
        for backend in &self.chain {
            if !backend.has_credentials() {
                debug!("skipping {}: no API key configured", backend.id());
                continue;
            }
            match backend.greet().await {
                Ok(greeting) => return Ok(greeting),
                Err(err) => {
                    warn!("provider {} failed: {err}", backend.id());
                    attempts.push((backend.id(), err));
                }
            }
        }

        Err(DispatchError::NoProviderConfigured { attempts })
    }
}
