//! Rule handler helpers
//!
//! Adapters that decide which descriptor elements a rule visits, and the
//! walkers they are built on.

pub mod adapters;
pub mod walk;

pub use adapters::{FieldRuleHandler, FilePairRuleHandler, FileRuleHandler, MessageRuleHandler};
pub use walk::{FieldRef, MessageRef, walk_fields, walk_messages};
