//! Value objects
//!
//! Immutable data exchanged between plugins, the engine and the transport.

pub mod annotation;
pub mod descriptor;
pub mod identifier;
pub mod request;
pub mod response;
pub mod rule_type;

pub use annotation::{Annotation, ExecutionFailure, Location};
pub use descriptor::{
    DescriptorSet, EnumDescriptor, FieldDescriptor, FieldLabel, FileDescriptor, MessageDescriptor,
};
pub use identifier::{IdentifierError, is_valid_identifier, validate_identifier};
pub use request::CheckRequest;
pub use response::{CheckResponse, ListCategoriesResponse, ListRulesResponse};
pub use rule_type::RuleType;
