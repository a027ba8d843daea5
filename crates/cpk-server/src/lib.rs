//! # Check Plugin Server
//!
//! Serves a plugin's [`Spec`](cpk_domain::Spec) to a host process.
//!
//! The host writes one JSON request per line to the plugin's stdin and reads
//! one JSON response per line from its stdout:
//!
//! ```text
//! {"id":1,"method":"list_rules"}
//! {"id":1,"result":{"rules":[...],"categories":[...]}}
//! ```
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PluginServer`] | Routes requests to dispatch and listing |
//! | [`transport::serve_lines`] | Concurrent JSON-lines loop over any async reader/writer |
//! | [`run_stdio`] | Validate a spec, set up logging and serve stdin/stdout |

pub mod constants;
pub mod init;
pub mod plugin_server;
pub mod transport;

pub use init::{run_stdio, serve_stdio};
pub use plugin_server::PluginServer;
pub use transport::{PluginError, PluginRequest, PluginResponse};
