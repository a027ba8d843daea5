//! Configuration management
//!
//! Configuration types and the loader that layers defaults, a TOML file and
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DispatchConfig, LoggingConfig};
