//! Validated spec registry
//!
//! The immutable, shareable form of a plugin spec. Constructing one runs the
//! full validation pass; afterwards rules and categories are kept sorted by
//! id and never change, so any number of requests can read them through an
//! `Arc` without locking.

use super::validator::validate_spec;
use cpk_domain::error::SpecError;
use cpk_domain::{BeforeHook, CategorySpec, RuleSpec, Spec};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// A plugin spec that passed validation
pub struct SpecRegistry {
    rules: Vec<RuleSpec>,
    categories: Vec<CategorySpec>,
    rule_index: HashMap<String, usize>,
    before: Option<Arc<dyn BeforeHook>>,
}

impl SpecRegistry {
    /// Validate `spec` and freeze it
    pub fn new(spec: Spec) -> Result<Self, SpecError> {
        validate_spec(&spec)?;

        let Spec {
            mut rules,
            mut categories,
            before,
        } = spec;
        rules.sort_by(|a, b| a.id.cmp(&b.id));
        categories.sort_by(|a, b| a.id.cmp(&b.id));
        let rule_index = rules
            .iter()
            .enumerate()
            .map(|(i, rule)| (rule.id.clone(), i))
            .collect();

        info!(
            rules = rules.len(),
            categories = categories.len(),
            before_hook = before.is_some(),
            "Plugin spec validated"
        );

        Ok(Self {
            rules,
            categories,
            rule_index,
            before,
        })
    }

    /// Rules sorted by id
    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    /// Categories sorted by id
    pub fn categories(&self) -> &[CategorySpec] {
        &self.categories
    }

    /// Look up a rule
    pub fn rule(&self, id: &str) -> Option<&RuleSpec> {
        self.rule_index.get(id).map(|&i| &self.rules[i])
    }

    /// Default rules sorted by id
    pub fn default_rules(&self) -> impl Iterator<Item = &RuleSpec> {
        self.rules.iter().filter(|r| r.is_default)
    }

    /// The before hook, if any
    pub fn before(&self) -> Option<&Arc<dyn BeforeHook>> {
        self.before.as_ref()
    }
}

impl std::fmt::Debug for SpecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecRegistry")
            .field("rules", &self.rules)
            .field("categories", &self.categories)
            .field("before", &self.before.is_some())
            .finish_non_exhaustive()
    }
}
