//! Use cases
//!
//! Request-level operations over a validated [`crate::SpecRegistry`].

pub mod dispatch;
pub mod filter;
pub mod listing;
