//! Main application configuration

use super::{DispatchConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Request dispatch configuration
    pub dispatch: DispatchConfig,
}
