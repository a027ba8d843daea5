//! Response value objects

use super::annotation::{Annotation, ExecutionFailure};
use crate::entities::{Category, Rule};
use serde::{Deserialize, Serialize};

/// Aggregated result of a check request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Findings ordered by rule id, then emission order
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Rules whose handler failed, ordered by rule id
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub execution_failures: Vec<ExecutionFailure>,
}

impl CheckResponse {
    /// Whether every invoked rule ran to completion
    pub fn is_complete(&self) -> bool {
        self.execution_failures.is_empty()
    }

    /// Whether any rule reported a finding
    pub fn has_annotations(&self) -> bool {
        !self.annotations.is_empty()
    }
}

/// Every rule and category a plugin offers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRulesResponse {
    /// Rules sorted by id
    pub rules: Vec<Rule>,
    /// Categories sorted by id
    pub categories: Vec<Category>,
}

/// Every category a plugin offers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCategoriesResponse {
    /// Categories sorted by id
    pub categories: Vec<Category>,
}
