//! Category Registry
//!
//! Holds a plugin's category declarations for validation.

use super::{check_replacements, index_unique};
use cpk_domain::CategorySpec;
use cpk_domain::error::{EntityKind, SpecError};
use std::collections::HashMap;

/// Validated view over a set of category declarations
#[derive(Debug)]
pub struct CategoryRegistry<'a> {
    categories: &'a [CategorySpec],
    index: HashMap<&'a str, &'a CategorySpec>,
}

impl<'a> CategoryRegistry<'a> {
    /// Register categories, rejecting repeated ids
    ///
    /// The error lists every repeated id, sorted.
    pub fn register(categories: &'a [CategorySpec]) -> Result<Self, SpecError> {
        let index = index_unique(categories)?;
        Ok(Self { categories, index })
    }

    /// Check that deprecated categories only point at live categories
    ///
    /// A deprecated category without replacements is valid.
    pub fn validate_replacements(&self) -> Result<(), SpecError> {
        check_replacements(EntityKind::Category, &self.index)
    }

    /// Whether a category with `id` is registered
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a category
    pub fn get(&self, id: &str) -> Option<&'a CategorySpec> {
        self.index.get(id).copied()
    }

    /// Categories in declaration order
    pub fn categories(&self) -> &'a [CategorySpec] {
        self.categories
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether no categories are registered
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
