//! Check request value object

use super::descriptor::DescriptorSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A request to run checks over a descriptor set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Rules to run; empty selects the default rules
    #[serde(default)]
    pub rule_ids: Vec<String>,
    /// Files to check
    #[serde(default)]
    pub files: DescriptorSet,
    /// Previous version of the files, used by breaking rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub against_files: Option<DescriptorSet>,
    /// Opaque plugin options
    #[serde(default)]
    pub options: BTreeMap<String, serde_json::Value>,
}

impl CheckRequest {
    /// Create a request over `files` that runs the default rules
    pub fn new(files: impl Into<DescriptorSet>) -> Self {
        Self {
            files: files.into(),
            ..Self::default()
        }
    }

    /// Select specific rules
    pub fn with_rule_ids<I, S>(mut self, rule_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule_ids = rule_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the previous version of the files
    pub fn with_against_files(mut self, against: impl Into<DescriptorSet>) -> Self {
        self.against_files = Some(against.into());
        self
    }

    /// Set an option value
    pub fn with_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Look up an option value
    pub fn option(&self, key: &str) -> Option<&serde_json::Value> {
        self.options.get(key)
    }
}
