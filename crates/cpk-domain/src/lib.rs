//! # Domain Layer
//!
//! Core types for the Check Plugin Kit: the declarations a plugin registers
//! (rules, categories, the spec that groups them), the descriptor tree that
//! rules inspect, and the ports handlers implement.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Identifiers, rule types, descriptors, requests and responses |
//! | [`entities`] | Rule and category declarations, the plugin `Spec` |
//! | [`ports`] | `RuleHandler` and `BeforeHook` contracts |
//! | [`context`] | Per-request context with cancellation |
//! | [`writer`] | Per-invocation annotation sink |
//! | [`error`] | Domain error types |
//! | [`constants`] | Shared constants |

pub mod constants;
pub mod context;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;
pub mod writer;

// Re-export commonly used types
pub use context::CheckContext;
pub use entities::{Category, CategorySpec, Rule, RuleSpec, Spec};
pub use error::{Error, Result, SpecError};
pub use ports::{BeforeHook, RuleHandler};
pub use value_objects::{
    Annotation, CheckRequest, CheckResponse, DescriptorSet, ExecutionFailure, FieldDescriptor,
    FileDescriptor, ListCategoriesResponse, ListRulesResponse, Location, MessageDescriptor,
    RuleType,
};
pub use writer::ResponseWriter;
