//! Mock greeting backend for deterministic testing
//!
//! Returns scripted replies in order and records how often it was invoked,
//! enabling router tests without calling real providers.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::backend::GreetingBackend;
use hello_agent_core::{errors::ProviderError, Greeting, ProviderId};

/// A scripted reply for [`MockBackend`].
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Succeed with this message text.
    Text(String),

    /// Fail with `RequestFailed` carrying this status and body.
    Status(u16, String),

    /// Fail with a transport-level error.
    Network(String),
}

impl MockReply {
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text(message.into())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status(status, body.into())
    }
}

/// Mock backend with scripted replies, consumed in order.
///
/// When the script runs dry, further calls succeed with a fixed message.
pub struct MockBackend {
    id: ProviderId,
    model: String,
    credentialed: bool,
    replies: Mutex<Vec<MockReply>>,
    calls: AtomicUsize,
}

impl MockBackend {
    pub fn new(id: ProviderId) -> Self {
        Self {
            id,
            model: "mock-model".to_string(),
            credentialed: true,
            replies: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Report no configured API key; `greet` then fails like a real
    /// adapter would, with `MissingCredential`.
    pub fn without_credentials(mut self) -> Self {
        self.credentialed = false;
        self
    }

    pub fn with_reply(self, reply: MockReply) -> Self {
        self.replies.lock().push(reply);
        self
    }

    /// Number of `greet` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GreetingBackend for MockBackend {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn has_credentials(&self) -> bool {
        self.credentialed
    }

    async fn greet(&self) -> Result<Greeting, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.credentialed {
            return Err(ProviderError::MissingCredential(self.id));
        }

        let reply = {
            let mut replies = self.replies.lock();
            if replies.is_empty() {
                MockReply::Text("Hello from mock".to_string())
            } else {
                replies.remove(0)
            }
        };

        match reply {
            MockReply::Text(message) => Ok(Greeting::new(self.id, self.model.as_str(), message)),
            MockReply::Status(status, body) => Err(ProviderError::RequestFailed {
                provider: self.id,
                status,
                body,
            }),
            MockReply::Network(message) => Err(ProviderError::Network {
                provider: self.id,
                message,
            }),
        }
    }
}
