//! Plugin declarations

pub mod category;
pub mod rule;
pub mod spec;

pub use category::{Category, CategorySpec};
pub use rule::{Rule, RuleSpec};
pub use spec::Spec;
