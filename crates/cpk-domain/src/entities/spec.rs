//! Plugin spec
//!
//! The full declaration of a plugin: its rules, its categories and an
//! optional hook that runs before any handler. A spec is validated once, when
//! the plugin starts, and is read-only afterwards.

use super::category::CategorySpec;
use super::rule::RuleSpec;
use crate::ports::BeforeHook;
use std::fmt;
use std::sync::Arc;

/// Declaration of everything a plugin offers
#[derive(Clone, Default)]
pub struct Spec {
    /// Rules; at least one is required
    pub rules: Vec<RuleSpec>,
    /// Categories; required when any rule names a category
    pub categories: Vec<CategorySpec>,
    /// Runs once per check request before any handler
    pub before: Option<Arc<dyn BeforeHook>>,
}

impl Spec {
    /// Create a spec with the given rules
    pub fn new(rules: Vec<RuleSpec>) -> Self {
        Self {
            rules,
            categories: Vec::new(),
            before: None,
        }
    }

    /// Set the categories
    pub fn with_categories(mut self, categories: Vec<CategorySpec>) -> Self {
        self.categories = categories;
        self
    }

    /// Set the before hook
    pub fn with_before<H>(mut self, hook: H) -> Self
    where
        H: BeforeHook + 'static,
    {
        self.before = Some(Arc::new(hook));
        self
    }

    /// Rule ids in declaration order
    pub fn rule_ids(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.id.as_str())
    }

    /// Category ids in declaration order
    pub fn category_ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.id.as_str())
    }
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec")
            .field("rules", &self.rules)
            .field("categories", &self.categories)
            .field("before", &self.before.is_some())
            .finish()
    }
}
