//! Server-specific constants
//!
//! Error codes follow JSON-RPC where one applies; plugin-specific codes live
//! in the implementation-defined server error range.

// ============================================================================
// JSON-RPC ERROR CODES (Standard)
// ============================================================================

/// The line is not valid JSON
pub const JSONRPC_PARSE_ERROR: i32 = -32700;

/// The JSON is not a valid request object
pub const JSONRPC_INVALID_REQUEST: i32 = -32600;

/// Method not found
pub const JSONRPC_METHOD_NOT_FOUND: i32 = -32601;

/// Params could not be decoded, or named unknown rules
pub const JSONRPC_INVALID_PARAMS: i32 = -32602;

/// Internal error
pub const JSONRPC_INTERNAL_ERROR: i32 = -32603;

// ============================================================================
// PLUGIN ERROR CODES
// ============================================================================

/// The before hook rejected the request
pub const PLUGIN_BEFORE_HOOK_FAILED: i32 = -32001;

/// The request exceeded its time budget
pub const PLUGIN_REQUEST_TIMEOUT: i32 = -32002;

/// The request was cancelled before it completed
pub const PLUGIN_REQUEST_CANCELLED: i32 = -32003;

// ============================================================================
// METHODS
// ============================================================================

/// Run rules over a descriptor set
pub const METHOD_CHECK: &str = "check";

/// List rules and categories
pub const METHOD_LIST_RULES: &str = "list_rules";

/// List categories
pub const METHOD_LIST_CATEGORIES: &str = "list_categories";

// ============================================================================
// TRANSPORT
// ============================================================================

/// Responses buffered between request tasks and the stdout writer
pub const RESPONSE_CHANNEL_CAPACITY: usize = 64;
