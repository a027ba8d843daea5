//! Rule declarations
//!
//! [`RuleSpec`] is what a plugin registers: the metadata plus the handler
//! that runs the check. [`Rule`] is the listing form of the same metadata,
//! without the handler.

use crate::ports::RuleHandler;
use crate::value_objects::RuleType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A rule as registered by a plugin
#[derive(Clone)]
pub struct RuleSpec {
    /// Unique identifier (`TIMESTAMP_SUFFIX`)
    pub id: String,
    /// Categories the rule belongs to, in display order
    pub categories: Vec<String>,
    /// Whether the rule runs when a request selects no rules
    pub is_default: bool,
    /// User-facing sentence describing the check
    pub purpose: String,
    /// Lint or breaking
    pub rule_type: RuleType,
    /// Whether the rule is deprecated
    pub deprecated: bool,
    /// Rules that together replace this one; only set when deprecated
    pub replacement_ids: Vec<String>,
    /// Check implementation
    pub handler: Arc<dyn RuleHandler>,
}

impl RuleSpec {
    /// Declare a non-default, non-deprecated rule without categories
    pub fn new<H>(
        id: impl Into<String>,
        purpose: impl Into<String>,
        rule_type: RuleType,
        handler: H,
    ) -> Self
    where
        H: RuleHandler + 'static,
    {
        Self {
            id: id.into(),
            categories: Vec::new(),
            is_default: false,
            purpose: purpose.into(),
            rule_type,
            deprecated: false,
            replacement_ids: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    /// Set the categories
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the rule as a default rule
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Deprecate the rule in favour of `replacement_ids` (may be empty)
    pub fn deprecated_by<I, S>(mut self, replacement_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deprecated = true;
        self.replacement_ids = replacement_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Listing form of this rule
    pub fn to_rule(&self) -> Rule {
        Rule {
            id: self.id.clone(),
            categories: self.categories.clone(),
            is_default: self.is_default,
            purpose: self.purpose.clone(),
            rule_type: self.rule_type,
            deprecated: self.deprecated,
            replacement_ids: self.replacement_ids.clone(),
        }
    }
}

impl fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSpec")
            .field("id", &self.id)
            .field("categories", &self.categories)
            .field("is_default", &self.is_default)
            .field("purpose", &self.purpose)
            .field("rule_type", &self.rule_type)
            .field("deprecated", &self.deprecated)
            .field("replacement_ids", &self.replacement_ids)
            .finish_non_exhaustive()
    }
}

/// Listing form of a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier
    pub id: String,
    /// Category ids
    #[serde(default)]
    pub categories: Vec<String>,
    /// Whether the rule runs by default
    #[serde(rename = "default")]
    pub is_default: bool,
    /// User-facing sentence describing the check
    pub purpose: String,
    /// Lint or breaking
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    /// Whether the rule is deprecated
    #[serde(default)]
    pub deprecated: bool,
    /// Replacement rule ids
    #[serde(default)]
    pub replacement_ids: Vec<String>,
}
