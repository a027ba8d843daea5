//! Rule Registry
//!
//! Holds a plugin's rule declarations for validation. On top of the checks
//! shared with categories, every category a rule names must be registered
//! and every registered category must be named by some rule.

use super::category::CategoryRegistry;
use super::{check_replacements, index_unique};
use cpk_domain::RuleSpec;
use cpk_domain::error::{EntityKind, SpecError, UnknownCategory};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

/// Validated view over a set of rule declarations
#[derive(Debug)]
pub struct RuleRegistry<'a> {
    rules: &'a [RuleSpec],
    index: HashMap<&'a str, &'a RuleSpec>,
}

impl<'a> RuleRegistry<'a> {
    /// Register rules, rejecting repeated ids
    pub fn register(rules: &'a [RuleSpec]) -> Result<Self, SpecError> {
        let index = index_unique(rules)?;
        Ok(Self { rules, index })
    }

    /// Check that every category named by a rule is registered
    ///
    /// The error names each (rule, category) pair that does not resolve.
    pub fn validate_category_membership(
        &self,
        categories: &CategoryRegistry<'_>,
    ) -> Result<(), SpecError> {
        let violations: Vec<UnknownCategory> = self
            .rules
            .iter()
            .flat_map(|rule| {
                rule.categories
                    .iter()
                    .filter(|category_id| !categories.contains(category_id))
                    .map(|category_id| UnknownCategory {
                        rule_id: rule.id.clone(),
                        category_id: category_id.clone(),
                    })
            })
            .sorted_unstable_by(|a, b| {
                (a.rule_id.as_str(), a.category_id.as_str())
                    .cmp(&(b.rule_id.as_str(), b.category_id.as_str()))
            })
            .dedup()
            .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SpecError::UnknownCategories { violations })
        }
    }

    /// Check that every registered category is named by at least one rule
    pub fn validate_categories_used(
        &self,
        categories: &CategoryRegistry<'_>,
    ) -> Result<(), SpecError> {
        let used: HashSet<&str> = self
            .rules
            .iter()
            .flat_map(|rule| rule.categories.iter().map(String::as_str))
            .collect();
        let ids: Vec<String> = categories
            .categories()
            .iter()
            .filter(|category| !used.contains(category.id.as_str()))
            .map(|category| category.id.clone())
            .sorted_unstable()
            .collect();
        if ids.is_empty() {
            Ok(())
        } else {
            Err(SpecError::UnusedCategories { ids })
        }
    }

    /// Check that deprecated rules only point at live rules
    pub fn validate_replacements(&self) -> Result<(), SpecError> {
        check_replacements(EntityKind::Rule, &self.index)
    }

    /// Look up a rule
    pub fn get(&self, id: &str) -> Option<&'a RuleSpec> {
        self.index.get(id).copied()
    }

    /// Rules flagged as default, in declaration order
    pub fn default_rules(&self) -> impl Iterator<Item = &'a RuleSpec> {
        self.rules.iter().filter(|r| r.is_default)
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
