//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for plugin processes.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`logging`] | Tracing subscriber setup (stderr, optional JSON and file output) |
//! | [`error_ext`] | Context helpers for turning foreign errors into domain errors |
//! | [`constants`] | File names, prefixes and defaults |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, DispatchConfig, LoggingConfig};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
