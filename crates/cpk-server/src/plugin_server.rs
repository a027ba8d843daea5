//! Plugin request routing
//!
//! Translates transport envelopes into calls on the application layer and
//! maps domain errors onto protocol error codes.

use crate::constants::{
    JSONRPC_INTERNAL_ERROR, JSONRPC_INVALID_PARAMS, JSONRPC_INVALID_REQUEST,
    JSONRPC_METHOD_NOT_FOUND, JSONRPC_PARSE_ERROR, METHOD_CHECK, METHOD_LIST_CATEGORIES,
    METHOD_LIST_RULES, PLUGIN_BEFORE_HOOK_FAILED, PLUGIN_REQUEST_CANCELLED,
    PLUGIN_REQUEST_TIMEOUT,
};
use crate::transport::{PluginRequest, PluginResponse};
use cpk_application::{CheckService, DispatchOptions, SpecRegistry, list_categories, list_rules};
use cpk_domain::{CheckContext, CheckRequest, Error};
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Serves one validated plugin spec
#[derive(Debug, Clone)]
pub struct PluginServer {
    service: CheckService,
}

impl PluginServer {
    /// Create a server over a validated registry
    pub fn new(registry: Arc<SpecRegistry>) -> Self {
        Self {
            service: CheckService::new(registry),
        }
    }

    /// Override dispatch options
    pub fn with_options(mut self, options: DispatchOptions) -> Self {
        self.service = self.service.with_options(options);
        self
    }

    /// The registry being served
    pub fn registry(&self) -> &Arc<SpecRegistry> {
        self.service.registry()
    }

    /// Decode one request line and answer it
    ///
    /// Unreadable lines still get a response; its id is recovered when the
    /// line is JSON with a numeric `id`.
    pub async fn handle_line(&self, line: &str, token: CancellationToken) -> PluginResponse {
        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unparseable request line");
                return PluginResponse::error(None, JSONRPC_PARSE_ERROR, format!("Parse error: {e}"));
            }
        };
        let id = value.get("id").and_then(serde_json::Value::as_u64);
        match serde_json::from_value::<PluginRequest>(value) {
            Ok(request) => self.handle_request(request, token).await,
            Err(e) => PluginResponse::error(
                id,
                JSONRPC_INVALID_REQUEST,
                format!("Invalid request: {e}"),
            ),
        }
    }

    /// Route a decoded request
    pub async fn handle_request(
        &self,
        request: PluginRequest,
        token: CancellationToken,
    ) -> PluginResponse {
        debug!(id = request.id, method = %request.method, "Handling plugin request");
        match request.method.as_str() {
            METHOD_CHECK => self.handle_check(request.id, request.params, token).await,
            METHOD_LIST_RULES => to_response(request.id, &list_rules(self.registry())),
            METHOD_LIST_CATEGORIES => to_response(request.id, &list_categories(self.registry())),
            _ => PluginResponse::error(
                Some(request.id),
                JSONRPC_METHOD_NOT_FOUND,
                format!("Unknown method: {}", request.method),
            ),
        }
    }

    async fn handle_check(
        &self,
        id: u64,
        params: Option<serde_json::Value>,
        token: CancellationToken,
    ) -> PluginResponse {
        let request = match params.map(serde_json::from_value::<CheckRequest>).transpose() {
            Ok(request) => request.unwrap_or_default(),
            Err(e) => {
                return PluginResponse::error(
                    Some(id),
                    JSONRPC_INVALID_PARAMS,
                    format!("Invalid check params: {e}"),
                );
            }
        };

        match self.service.check(CheckContext::with_token(token), request).await {
            Ok(response) => to_response(id, &response),
            Err(e) => {
                warn!(id, error = %e, "Check request rejected");
                PluginResponse::error(Some(id), error_code(&e), e.to_string())
            }
        }
    }
}

/// Protocol error code for a request-level failure
pub fn error_code(error: &Error) -> i32 {
    match error {
        Error::UnknownRuleIds { .. } | Error::InvalidArgument { .. } | Error::Json { .. } => {
            JSONRPC_INVALID_PARAMS
        }
        Error::BeforeHook { .. } => PLUGIN_BEFORE_HOOK_FAILED,
        Error::Timeout { .. } => PLUGIN_REQUEST_TIMEOUT,
        Error::Cancelled => PLUGIN_REQUEST_CANCELLED,
        _ => JSONRPC_INTERNAL_ERROR,
    }
}

fn to_response<T: Serialize>(id: u64, result: &T) -> PluginResponse {
    match serde_json::to_value(result) {
        Ok(value) => PluginResponse::success(id, value),
        Err(e) => PluginResponse::error(
            Some(id),
            JSONRPC_INTERNAL_ERROR,
            format!("Failed to encode result: {e}"),
        ),
    }
}
