//! Rule Listing Use Case
//!
//! Projects a validated registry into its listing form. Performs no
//! validation of its own.

use crate::registry::SpecRegistry;
use cpk_domain::{Category, ListCategoriesResponse, ListRulesResponse, Rule};

/// Every rule and category, each sorted by id
pub fn list_rules(registry: &SpecRegistry) -> ListRulesResponse {
    let mut rules: Vec<Rule> = registry.rules().iter().map(|r| r.to_rule()).collect();
    rules.sort_by(|a, b| a.id.cmp(&b.id));
    ListRulesResponse {
        rules,
        categories: sorted_categories(registry),
    }
}

/// Every category, sorted by id
pub fn list_categories(registry: &SpecRegistry) -> ListCategoriesResponse {
    ListCategoriesResponse {
        categories: sorted_categories(registry),
    }
}

fn sorted_categories(registry: &SpecRegistry) -> Vec<Category> {
    let mut categories: Vec<Category> = registry
        .categories()
        .iter()
        .map(|c| c.to_category())
        .collect();
    categories.sort_by(|a, b| a.id.cmp(&b.id));
    categories
}
