//! Dispatch configuration types

use crate::constants::DEFAULT_REQUEST_TIMEOUT_MS;
use cpk_application::DispatchOptions;
use cpk_application::use_cases::dispatch::DEFAULT_MAX_CONCURRENT_RULES;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request dispatch configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Maximum number of rule handlers running at once per request
    pub max_concurrent_rules: usize,

    /// Budget for one check request in milliseconds (0 = unlimited)
    pub request_timeout_ms: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_rules: DEFAULT_MAX_CONCURRENT_RULES,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl DispatchConfig {
    /// Request timeout, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }
}

impl From<DispatchConfig> for DispatchOptions {
    fn from(config: DispatchConfig) -> Self {
        Self {
            max_concurrent_rules: config.max_concurrent_rules,
            request_timeout: config.request_timeout(),
        }
    }
}
