//! Per-request check context
//!
//! Carries the caller's cancellation signal into every handler invocation and
//! a small value bag the before hook can use to hand precomputed data to
//! handlers.

use std::collections::BTreeMap;
use tokio_util::sync::CancellationToken;

/// Context shared by every handler invoked for one request
#[derive(Debug, Clone, Default)]
pub struct CheckContext {
    cancel_token: CancellationToken,
    values: BTreeMap<String, serde_json::Value>,
}

impl CheckContext {
    /// Create a context with a fresh cancellation token
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context bound to an existing cancellation token
    pub fn with_token(cancel_token: CancellationToken) -> Self {
        Self {
            cancel_token,
            values: BTreeMap::new(),
        }
    }

    /// Return this context bound to another cancellation token, keeping its values
    pub fn with_cancel_token(mut self, cancel_token: CancellationToken) -> Self {
        self.cancel_token = cancel_token;
        self
    }

    /// Return a copy of this context carrying an extra value
    pub fn with_value(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Look up a value
    pub fn value(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// The cancellation token
    pub fn token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    /// Whether the caller cancelled the request
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Fail with [`crate::Error::Cancelled`] if the request was cancelled
    pub fn ensure_active(&self) -> crate::Result<()> {
        if self.is_cancelled() {
            Err(crate::Error::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Resolve once the request is cancelled
    pub async fn cancelled(&self) {
        self.cancel_token.cancelled().await;
    }
}
