//! Annotation value objects
//!
//! Annotations are the findings rules emit; execution failures record rules
//! that could not finish.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to the descriptor element an annotation is about
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File the element lives in
    pub file_name: String,
    /// Full name of the element, `None` when the whole file is meant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

impl Location {
    /// Location pointing at a whole file
    pub fn file(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            element: None,
        }
    }

    /// Location pointing at an element within a file
    pub fn element(file_name: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            element: Some(element.into()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element {
            Some(element) => write!(f, "{}:{}", self.file_name, element),
            None => write!(f, "{}", self.file_name),
        }
    }
}

/// A single finding produced by a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Rule that produced the finding
    pub rule_id: String,
    /// User-facing message
    pub message: String,
    /// Element the finding refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {} [{}]", location, self.message, self.rule_id),
            None => write!(f, "{} [{}]", self.message, self.rule_id),
        }
    }
}

/// A rule whose handler returned an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionFailure {
    /// The failing rule
    pub rule_id: String,
    /// The handler's error message
    pub message: String,
}
