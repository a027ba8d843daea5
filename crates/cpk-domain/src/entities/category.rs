//! Category declarations

use serde::{Deserialize, Serialize};

/// A category as registered by a plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpec {
    /// Unique identifier (`STYLE_BASIC`)
    pub id: String,
    /// User-facing sentence describing the grouping
    pub purpose: String,
    /// Whether the category is deprecated
    pub deprecated: bool,
    /// Categories that replace this one; only set when deprecated
    pub replacement_ids: Vec<String>,
}

impl CategorySpec {
    /// Declare a non-deprecated category
    pub fn new(id: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            purpose: purpose.into(),
            deprecated: false,
            replacement_ids: Vec::new(),
        }
    }

    /// Deprecate the category in favour of `replacement_ids` (may be empty)
    pub fn deprecated_by<I, S>(mut self, replacement_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deprecated = true;
        self.replacement_ids = replacement_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Listing form of this category
    pub fn to_category(&self) -> Category {
        Category {
            id: self.id.clone(),
            purpose: self.purpose.clone(),
            deprecated: self.deprecated,
            replacement_ids: self.replacement_ids.clone(),
        }
    }
}

/// Listing form of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: String,
    /// User-facing sentence describing the grouping
    pub purpose: String,
    /// Whether the category is deprecated
    #[serde(default)]
    pub deprecated: bool,
    /// Replacement category ids
    #[serde(default)]
    pub replacement_ids: Vec<String>,
}
