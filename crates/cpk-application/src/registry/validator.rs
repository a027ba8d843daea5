//! Spec Validator
//!
//! One full validation pass over a plugin's declarations. Steps run in a
//! fixed order and stop at the first failing step; inside a step every
//! offender is collected so the error is complete.
//!
//! 1. at least one rule
//! 2. no id repeated across rules and categories combined
//! 3. identifier syntax
//! 4. non-empty purpose
//! 5. rule categories are declared
//! 6. every declared category is used by a rule
//! 7. replacement integrity, categories then rules

use super::category::CategoryRegistry;
use super::rule::RuleRegistry;
use super::{Declaration, find_duplicate_ids};
use cpk_domain::Spec;
use cpk_domain::error::{InvalidId, SpecError};
use cpk_domain::value_objects::validate_identifier;
use itertools::Itertools;

/// Validate a plugin spec
pub fn validate_spec(spec: &Spec) -> Result<(), SpecError> {
    if spec.rules.is_empty() {
        return Err(SpecError::EmptyRules);
    }

    let ids = find_duplicate_ids(spec.rule_ids().chain(spec.category_ids()));
    if !ids.is_empty() {
        return Err(SpecError::DuplicateIds { ids });
    }

    validate_identifiers(spec)?;
    validate_purposes(spec)?;

    let categories = CategoryRegistry::register(&spec.categories)?;
    let rules = RuleRegistry::register(&spec.rules)?;
    rules.validate_category_membership(&categories)?;
    rules.validate_categories_used(&categories)?;
    categories.validate_replacements()?;
    rules.validate_replacements()
}

fn validate_identifiers(spec: &Spec) -> Result<(), SpecError> {
    let violations: Vec<InvalidId> = spec
        .rule_ids()
        .chain(spec.category_ids())
        .filter_map(|id| {
            validate_identifier(id).err().map(|reason| InvalidId {
                id: id.to_string(),
                reason,
            })
        })
        .sorted_unstable_by(|a, b| a.id.cmp(&b.id))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(SpecError::InvalidIds { violations })
    }
}

fn validate_purposes(spec: &Spec) -> Result<(), SpecError> {
    let rules = spec.rules.iter().map(|r| r as &dyn Declaration);
    let categories = spec.categories.iter().map(|c| c as &dyn Declaration);
    let ids: Vec<String> = rules
        .chain(categories)
        .filter(|d| d.purpose().trim().is_empty())
        .map(|d| d.id().to_string())
        .sorted_unstable()
        .collect();
    if ids.is_empty() {
        Ok(())
    } else {
        Err(SpecError::EmptyPurpose { ids })
    }
}
