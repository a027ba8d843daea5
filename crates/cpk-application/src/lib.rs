//! # Application Layer
//!
//! Turns a plugin's declarations into a running check engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Category and rule registries, spec validation, the validated [`SpecRegistry`] |
//! | [`use_cases`] | Check dispatch, rule listing, rule filtering |
//! | [`handlers`] | Adapters that turn per-file / per-message / per-field callbacks into handlers |
//!
//! ## Example
//!
//! ```
//! use cpk_application::{CheckService, SpecRegistry};
//! use cpk_application::handlers::FileRuleHandler;
//! use cpk_domain::{CheckContext, CheckRequest, FileDescriptor, RuleSpec, RuleType, Spec};
//! use std::sync::Arc;
//!
//! # tokio_test_block(async {
//! let rule = RuleSpec::new(
//!     "PACKAGE_DEFINED",
//!     "Checks that every file declares a package.",
//!     RuleType::Lint,
//!     FileRuleHandler::new(|_, writer, _, file| {
//!         if file.package.is_empty() {
//!             writer.add_file_annotation("Files must declare a package.", &file.name);
//!         }
//!         Ok(())
//!     }),
//! )
//! .with_default(true);
//!
//! let registry = Arc::new(SpecRegistry::new(Spec::new(vec![rule])).unwrap());
//! let service = CheckService::new(registry);
//! let request = CheckRequest::new(vec![FileDescriptor::new("a.proto")]);
//! let response = service.check(CheckContext::new(), request).await.unwrap();
//! assert_eq!(response.annotations.len(), 1);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

pub mod handlers;
pub mod registry;
pub mod use_cases;

pub use registry::{CategoryRegistry, RuleRegistry, SpecRegistry, validate_spec};
pub use use_cases::dispatch::{CheckService, DispatchOptions, resolve_rules};
pub use use_cases::filter::RuleFilter;
pub use use_cases::listing::{list_categories, list_rules};
