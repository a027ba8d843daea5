//! Plugin Transport Layer
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Request / response envelopes |
//! | [`stdio`] | JSON-lines loop over async byte streams |

pub mod stdio;
pub mod types;

pub use stdio::serve_lines;
pub use types::{PluginError, PluginRequest, PluginResponse};
