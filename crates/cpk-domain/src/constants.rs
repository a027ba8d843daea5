//! Domain constants
//!
//! Values that are part of the plugin contract and must agree between the
//! registering code, the engine and the tooling that consumes listings.

/// Minimum number of characters in a rule or category identifier
pub const MIN_IDENTIFIER_LEN: usize = 4;

/// Separator used by the identifier grammar
pub const IDENTIFIER_SEPARATOR: char = '_';

/// Wire name of [`crate::RuleType::Lint`]
pub const RULE_TYPE_LINT: &str = "LINT";

/// Wire name of [`crate::RuleType::Breaking`]
pub const RULE_TYPE_BREAKING: &str = "BREAKING";
