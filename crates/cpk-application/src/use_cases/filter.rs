//! Rule Filtering
//!
//! Category-based inclusion and exclusion as done by the tooling that drives
//! plugins. Kept apart from dispatch: it is a pure function over a rule
//! listing whose output becomes the `rule_ids` of a check request.

use cpk_domain::error::{Error, Result};
use cpk_domain::{ListRulesResponse, Rule};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Include/exclude selection over rule and category ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleFilter {
    /// Rule or category ids to include; empty selects the default rules
    pub use_ids: Vec<String>,
    /// Rule or category ids to remove from the selection
    pub except_ids: Vec<String>,
}

impl RuleFilter {
    /// Create an empty filter (default rules, nothing excluded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Include rules or categories
    pub fn with_use<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Exclude rules or categories
    pub fn with_except<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Rule ids selected by this filter, sorted
    ///
    /// A category expands to its non-deprecated rules; a rule id selects that
    /// rule even when deprecated. Unknown ids are rejected.
    pub fn apply(&self, listing: &ListRulesResponse) -> Result<Vec<String>> {
        let unknown: Vec<&str> = self
            .use_ids
            .iter()
            .chain(&self.except_ids)
            .map(String::as_str)
            .filter(|id| !is_known(listing, id))
            .unique()
            .sorted_unstable()
            .collect();
        if !unknown.is_empty() {
            return Err(Error::invalid_argument(format!(
                "unknown rule or category IDs: {}",
                unknown.join(", ")
            )));
        }

        let mut selected: BTreeSet<&str> = if self.use_ids.is_empty() {
            listing
                .rules
                .iter()
                .filter(|r| r.is_default)
                .map(|r| r.id.as_str())
                .collect()
        } else {
            expand(listing, &self.use_ids)
        };
        for id in expand(listing, &self.except_ids) {
            selected.remove(id);
        }
        Ok(selected.into_iter().map(str::to_string).collect())
    }
}

fn is_known(listing: &ListRulesResponse, id: &str) -> bool {
    listing.rules.iter().any(|r| r.id == id) || listing.categories.iter().any(|c| c.id == id)
}

fn expand<'a>(listing: &'a ListRulesResponse, ids: &[String]) -> BTreeSet<&'a str> {
    ids.iter()
        .flat_map(|id| {
            listing.rules.iter().filter(move |rule| {
                rule.id == *id || (!rule.deprecated && in_category(rule, id))
            })
        })
        .map(|rule| rule.id.as_str())
        .collect()
}

fn in_category(rule: &Rule, category_id: &str) -> bool {
    rule.categories.iter().any(|c| c == category_id)
}
