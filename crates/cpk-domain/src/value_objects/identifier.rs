//! Identifier grammar shared by rules and categories
//!
//! An identifier has at least [`MIN_IDENTIFIER_LEN`] characters, starts and
//! ends with an uppercase ASCII letter, and otherwise contains only uppercase
//! ASCII letters and underscores (`SYNTAX_UNSPECIFIED`, `FILE_LAYOUT`).

use crate::constants::{IDENTIFIER_SEPARATOR, MIN_IDENTIFIER_LEN};
use thiserror::Error;

/// Reason an identifier was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierError {
    /// Fewer than [`MIN_IDENTIFIER_LEN`] characters
    #[error("must have at least {MIN_IDENTIFIER_LEN} characters")]
    TooShort,
    /// First or last character is not `A-Z`
    #[error("must start and end with a capital letter A-Z")]
    InvalidBoundary,
    /// A character outside `[A-Z_]`
    #[error("contains {0:?}, only capital letters A-Z and '_' are allowed")]
    InvalidCharacter(char),
}

/// Validate a rule or category identifier
pub fn validate_identifier(id: &str) -> Result<(), IdentifierError> {
    if id.chars().count() < MIN_IDENTIFIER_LEN {
        return Err(IdentifierError::TooShort);
    }
    if let Some(c) = id
        .chars()
        .find(|c| !c.is_ascii_uppercase() && *c != IDENTIFIER_SEPARATOR)
    {
        return Err(IdentifierError::InvalidCharacter(c));
    }
    let starts = id.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    let ends = id.chars().last().is_some_and(|c| c.is_ascii_uppercase());
    if !(starts && ends) {
        return Err(IdentifierError::InvalidBoundary);
    }
    Ok(())
}

/// Whether `id` satisfies the identifier grammar
pub fn is_valid_identifier(id: &str) -> bool {
    validate_identifier(id).is_ok()
}
