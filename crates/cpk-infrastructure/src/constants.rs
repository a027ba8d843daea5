//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `cpk_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cpk.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cpk";

/// Environment variable prefix for configuration (`CPK__LOGGING__LEVEL`)
pub const CONFIG_ENV_PREFIX: &str = "CPK";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_ENV_FILTER: &str = "CPK_LOG";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "cpk";

// ============================================================================
// DISPATCH CONSTANTS
// ============================================================================

/// Default request timeout in milliseconds, 0 disables the timeout
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 0;
