//! Plugin process startup
//!
//! Loads configuration, installs logging, validates the spec and serves it
//! over stdin/stdout until EOF or an interrupt.

use crate::plugin_server::PluginServer;
use crate::transport::serve_lines;
use cpk_application::SpecRegistry;
use cpk_domain::Spec;
use cpk_domain::error::Result;
use cpk_infrastructure::{AppConfig, ConfigLoader, init_logging};
use std::path::Path;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Run a plugin over stdio
///
/// An invalid spec fails here, before the first request is read.
pub async fn run_stdio(spec: Spec, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    let registry = Arc::new(SpecRegistry::new(spec)?);
    let server = Arc::new(PluginServer::new(registry).with_options(config.dispatch.into()));

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, shutting down");
                signal_token.cancel();
            }
            Err(e) => warn!(error = %e, "Failed to listen for interrupt"),
        }
    });

    info!(
        max_concurrent_rules = config.dispatch.max_concurrent_rules,
        request_timeout_ms = config.dispatch.request_timeout_ms,
        "Serving plugin over stdio"
    );
    serve_stdio(server, shutdown).await
}

/// Serve an already built server over stdin/stdout
pub async fn serve_stdio(server: Arc<PluginServer>, shutdown: CancellationToken) -> Result<()> {
    serve_lines(
        server,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        shutdown,
    )
    .await
}

/// Load configuration from an optional path
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}
