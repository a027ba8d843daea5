//! Error handling types
//!
//! Two families live here: [`SpecError`] for construction-time validation of
//! a plugin's declarations, and [`Error`] for everything that can go wrong
//! while serving requests.

use crate::value_objects::identifier::IdentifierError;
use std::fmt;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of declaration an offending identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A rule declaration
    Rule,
    /// A category declaration
    Category,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule => write!(f, "rule"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// An identifier that failed the syntax check, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidId {
    /// The offending identifier
    pub id: String,
    /// Why it was rejected
    pub reason: IdentifierError,
}

/// A rule that names a category the spec does not declare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory {
    /// The declaring rule
    pub rule_id: String,
    /// The category id that does not resolve
    pub category_id: String,
}

/// Why a replacement reference is invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementProblem {
    /// The replacement id is not declared
    Missing,
    /// The replacement is itself deprecated
    Deprecated,
}

/// A deprecated declaration pointing at an unusable replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidReplacement {
    /// The deprecated declaration
    pub id: String,
    /// The replacement it references
    pub replacement_id: String,
    /// What is wrong with the reference
    pub problem: ReplacementProblem,
}

/// Construction-time validation failure of a plugin spec
///
/// Every variant carries the complete, sorted list of offenders found by the
/// failing step so one run reports everything that needs fixing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The spec declares no rules at all
    #[error("spec must declare at least one rule")]
    EmptyRules,

    /// Identifiers repeated across the combined rule and category namespace
    #[error("duplicate rule or category IDs: {}", .ids.join(", "))]
    DuplicateIds {
        /// Every repeated id, sorted
        ids: Vec<String>,
    },

    /// Identifiers that do not match the identifier grammar
    #[error("invalid rule or category IDs: {}", describe_invalid_ids(.violations))]
    InvalidIds {
        /// Every invalid id with its reason, sorted by id
        violations: Vec<InvalidId>,
    },

    /// Declarations without a purpose sentence
    #[error("rules or categories with an empty purpose: {}", .ids.join(", "))]
    EmptyPurpose {
        /// Every id with an empty purpose, sorted
        ids: Vec<String>,
    },

    /// Rules referencing undeclared categories
    #[error("rules reference unknown categories: {}", describe_unknown_categories(.violations))]
    UnknownCategories {
        /// Every (rule, category) pair that does not resolve, sorted
        violations: Vec<UnknownCategory>,
    },

    /// Declared categories that no rule names
    #[error("categories not referenced by any rule: {}", .ids.join(", "))]
    UnusedCategories {
        /// Every unreferenced category id, sorted
        ids: Vec<String>,
    },

    /// Deprecated declarations with missing or deprecated replacements
    #[error("invalid {kind} replacements: {}", describe_replacements(.violations))]
    InvalidReplacements {
        /// Which namespace was checked
        kind: EntityKind,
        /// Every broken reference, sorted
        violations: Vec<InvalidReplacement>,
    },

    /// Replacement ids declared on a declaration that is not deprecated
    #[error("{kind}s declare replacements but are not deprecated: {}", .ids.join(", "))]
    ReplacementsWithoutDeprecation {
        /// Which namespace was checked
        kind: EntityKind,
        /// Every offending id, sorted
        ids: Vec<String>,
    },
}

impl SpecError {
    /// Identifiers named by this error, in reporting order
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::EmptyRules => Vec::new(),
            Self::DuplicateIds { ids }
            | Self::EmptyPurpose { ids }
            | Self::UnusedCategories { ids }
            | Self::ReplacementsWithoutDeprecation { ids, .. } => {
                ids.iter().map(String::as_str).collect()
            }
            Self::InvalidIds { violations } => violations.iter().map(|v| v.id.as_str()).collect(),
            Self::UnknownCategories { violations } => {
                violations.iter().map(|v| v.rule_id.as_str()).collect()
            }
            Self::InvalidReplacements { violations, .. } => {
                violations.iter().map(|v| v.id.as_str()).collect()
            }
        }
    }
}

fn describe_invalid_ids(violations: &[InvalidId]) -> String {
    violations
        .iter()
        .map(|v| format!("{:?} ({})", v.id, v.reason))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_unknown_categories(violations: &[UnknownCategory]) -> String {
    violations
        .iter()
        .map(|v| format!("{} -> {}", v.rule_id, v.category_id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_replacements(violations: &[InvalidReplacement]) -> String {
    violations
        .iter()
        .map(|v| match v.problem {
            ReplacementProblem::Missing => {
                format!("{} -> {} (not declared)", v.id, v.replacement_id)
            }
            ReplacementProblem::Deprecated => {
                format!("{} -> {} (deprecated)", v.id, v.replacement_id)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Main error type for the Check Plugin Kit
#[derive(Error, Debug)]
pub enum Error {
    /// The plugin spec failed construction-time validation
    #[error("Invalid spec: {0}")]
    Spec(#[from] SpecError),

    /// A check request selected rule ids that are not registered
    #[error("Unknown rule IDs requested: {}", .ids.join(", "))]
    UnknownRuleIds {
        /// Every unknown id, sorted
        ids: Vec<String>,
    },

    /// The before hook rejected the request
    #[error("Before hook failed: {message}")]
    BeforeHook {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A rule handler failed while inspecting descriptors
    #[error("Rule handler failed: {message}")]
    Handler {
        /// Description of the failure
        message: String,
    },

    /// The request context was cancelled
    #[error("Request cancelled")]
    Cancelled,

    /// The request exceeded its time budget
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured budget in milliseconds
        timeout_ms: u64,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Request error creation methods
impl Error {
    /// Create a handler error
    pub fn handler<S: Into<String>>(message: S) -> Self {
        Self::Handler {
            message: message.into(),
        }
    }

    /// Create a before hook error
    pub fn before_hook<S: Into<String>>(message: S) -> Self {
        Self::BeforeHook {
            message: message.into(),
            source: None,
        }
    }

    /// Create a before hook error with source
    pub fn before_hook_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::BeforeHook {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether the error rejects the whole request rather than one rule
    pub fn is_request_level(&self) -> bool {
        matches!(
            self,
            Self::UnknownRuleIds { .. }
                | Self::BeforeHook { .. }
                | Self::Cancelled
                | Self::Timeout { .. }
                | Self::InvalidArgument { .. }
        )
    }
}
