//! Domain Port Interfaces
//!
//! Contracts plugins implement and the engine calls.

/// Rule handler port
pub mod handler;
/// Before hook port
pub mod hook;

pub use handler::{FnRuleHandler, RuleHandler};
pub use hook::{BeforeHook, FnBeforeHook};
