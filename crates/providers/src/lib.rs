//! # LLM Provider Adapters
//!
//! This crate provides integrations with the supported LLM providers:
//! - Google Gemini (generateContent API)
//! - Groq (OpenAI-compatible chat completions)
//! - OpenAI (chat completions)
//!
//! Each adapter performs a single request for a fixed greeting prompt and
//! maps the provider-specific response into a normalized [`Greeting`].
//! Provider selection and fallback ordering live in [`ProviderRouter`].
//!
//! [`Greeting`]: hello_agent_core::Greeting

pub mod backend;
pub mod gemini;
pub mod groq;
pub mod mock;
pub mod openai;
pub mod router;

pub use backend::{GreetingBackend, HELLO_PROMPT};
pub use gemini::GeminiProvider;
pub use groq::GroqProvider;
pub use mock::{MockBackend, MockReply};
pub use openai::OpenAiProvider;
pub use router::ProviderRouter;
