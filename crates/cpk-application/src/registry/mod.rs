//! Rule Registry System
//!
//! Validates a plugin's declarations and holds the validated result.
//!
//! Rules and categories share one identifier namespace and the same
//! deprecation model, so the checks common to both live here and the two
//! registries only add what is specific to them.

pub mod category;
pub mod rule;
pub mod spec_registry;
pub mod validator;

pub use category::CategoryRegistry;
pub use rule::RuleRegistry;
pub use spec_registry::SpecRegistry;
pub use validator::validate_spec;

use cpk_domain::error::{EntityKind, InvalidReplacement, ReplacementProblem, SpecError};
use cpk_domain::{CategorySpec, RuleSpec};
use itertools::Itertools;
use std::collections::HashMap;

/// Fields shared by rule and category declarations
pub(crate) trait Declaration {
    fn id(&self) -> &str;
    fn purpose(&self) -> &str;
    fn deprecated(&self) -> bool;
    fn replacement_ids(&self) -> &[String];
}

impl Declaration for RuleSpec {
    fn id(&self) -> &str {
        &self.id
    }

    fn purpose(&self) -> &str {
        &self.purpose
    }

    fn deprecated(&self) -> bool {
        self.deprecated
    }

    fn replacement_ids(&self) -> &[String] {
        &self.replacement_ids
    }
}

impl Declaration for CategorySpec {
    fn id(&self) -> &str {
        &self.id
    }

    fn purpose(&self) -> &str {
        &self.purpose
    }

    fn deprecated(&self) -> bool {
        self.deprecated
    }

    fn replacement_ids(&self) -> &[String] {
        &self.replacement_ids
    }
}

/// Every id that occurs more than once, sorted
pub(crate) fn find_duplicate_ids<'a, I>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter()
        .duplicates()
        .sorted_unstable()
        .map(str::to_string)
        .collect()
}

/// Index declarations by id, rejecting repeats
pub(crate) fn index_unique<D: Declaration>(
    declarations: &[D],
) -> Result<HashMap<&str, &D>, SpecError> {
    let ids = find_duplicate_ids(declarations.iter().map(Declaration::id));
    if !ids.is_empty() {
        return Err(SpecError::DuplicateIds { ids });
    }
    Ok(declarations.iter().map(|d| (d.id(), d)).collect())
}

/// Check deprecation and replacement integrity within one namespace
///
/// Replacements are only allowed on deprecated declarations, and each must
/// name an existing declaration that is not itself deprecated.
pub(crate) fn check_replacements<D: Declaration>(
    kind: EntityKind,
    index: &HashMap<&str, &D>,
) -> Result<(), SpecError> {
    let undeprecated: Vec<String> = index
        .values()
        .filter(|d| !d.deprecated() && !d.replacement_ids().is_empty())
        .map(|d| d.id().to_string())
        .sorted_unstable()
        .collect();
    if !undeprecated.is_empty() {
        return Err(SpecError::ReplacementsWithoutDeprecation {
            kind,
            ids: undeprecated,
        });
    }

    let violations: Vec<InvalidReplacement> = index
        .values()
        .filter(|d| d.deprecated())
        .flat_map(|d| {
            d.replacement_ids()
                .iter()
                .filter_map(|replacement_id| {
                    let problem = match index.get(replacement_id.as_str()) {
                        None => ReplacementProblem::Missing,
                        Some(replacement) if replacement.deprecated() => {
                            ReplacementProblem::Deprecated
                        }
                        Some(_) => return None,
                    };
                    Some(InvalidReplacement {
                        id: d.id().to_string(),
                        replacement_id: replacement_id.clone(),
                        problem,
                    })
                })
                .collect::<Vec<_>>()
        })
        .sorted_unstable_by(|a, b| {
            (a.id.as_str(), a.replacement_id.as_str())
                .cmp(&(b.id.as_str(), b.replacement_id.as_str()))
        })
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(SpecError::InvalidReplacements { kind, violations })
    }
}
