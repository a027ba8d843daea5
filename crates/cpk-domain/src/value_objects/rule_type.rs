//! Rule type value object

use crate::constants::{RULE_TYPE_BREAKING, RULE_TYPE_LINT};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of check a rule performs
///
/// Serialized with the wire names `LINT` and `BREAKING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    /// Style and correctness checks on a single descriptor set
    Lint,
    /// Compatibility checks between a descriptor set and its previous version
    Breaking,
}

impl RuleType {
    /// All variants in wire order
    pub const ALL: [Self; 2] = [Self::Lint, Self::Breaking];

    /// Wire name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lint => RULE_TYPE_LINT,
            Self::Breaking => RULE_TYPE_BREAKING,
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown rule type: {s}")))
    }
}
