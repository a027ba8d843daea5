//! Per-invocation annotation sink
//!
//! The engine creates one [`ResponseWriter`] for every rule it invokes. The
//! writer stamps the rule id on each annotation and accepts concurrent
//! appends, so a handler may fan out internally while writing through a
//! shared reference.

use crate::value_objects::{Annotation, Location};
use std::sync::Mutex;

/// Collects the annotations of a single rule invocation
#[derive(Debug)]
pub struct ResponseWriter {
    rule_id: String,
    annotations: Mutex<Vec<Annotation>>,
}

impl ResponseWriter {
    /// Create an empty writer for `rule_id`
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            annotations: Mutex::new(Vec::new()),
        }
    }

    /// Rule this writer is scoped to
    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    /// Record a finding about `location`
    pub fn add_annotation(&self, message: impl Into<String>, location: Option<Location>) {
        let annotation = Annotation {
            rule_id: self.rule_id.clone(),
            message: message.into(),
            location,
        };
        self.lock().push(annotation);
    }

    /// Record a finding about a whole file
    pub fn add_file_annotation(&self, message: impl Into<String>, file_name: &str) {
        self.add_annotation(message, Some(Location::file(file_name)));
    }

    /// Record a finding about an element of a file
    pub fn add_element_annotation(
        &self,
        message: impl Into<String>,
        file_name: &str,
        element: &str,
    ) {
        self.add_annotation(message, Some(Location::element(file_name, element)));
    }

    /// Number of annotations recorded so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the writer, returning annotations in emission order
    pub fn into_annotations(self) -> Vec<Annotation> {
        self.annotations
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Annotation>> {
        // A panicking handler cannot leave a half-written Vec behind.
        self.annotations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
