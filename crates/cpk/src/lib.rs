//! # Check Plugin Kit
//!
//! Build lint and breaking-change plugins for schema descriptors.
//!
//! A plugin declares its rules and categories once as a [`Spec`]. The spec is
//! validated at startup, then check requests from the host are dispatched to
//! the matching rule handlers and their annotations are returned in one
//! deterministic response.
//!
//! ## Example
//!
//! ```no_run
//! use cpk::application::handlers::FileRuleHandler;
//! use cpk::{RuleSpec, RuleType, Spec};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let spec = Spec::new(vec![
//!         RuleSpec::new(
//!             "PACKAGE_DEFINED",
//!             "Checks that every file declares a package.",
//!             RuleType::Lint,
//!             FileRuleHandler::new(|_, writer, _, file| {
//!                 if file.package.is_empty() {
//!                     writer.add_file_annotation("Files must declare a package.", &file.name);
//!                 }
//!                 Ok(())
//!             }),
//!         )
//!         .with_default(true),
//!     ]);
//!     cpk::run_stdio(spec, None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Rules, categories, descriptors, handler ports, errors
//! - `application` - Spec validation, dispatch, listing, filtering, adapters
//! - `infrastructure` - Configuration, logging, error context
//! - `server` - JSON-lines stdio transport
//! - [`rules`] - The demo plugin shipped with the `cpk` binary

/// Domain layer - rules, descriptors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cpk_domain::*;
}

/// Application layer - validation, dispatch and listing
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use cpk_application::*;
}

/// Infrastructure layer - configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cpk_infrastructure::*;
}

/// Server layer - plugin transport
///
/// Re-exports from the server crate for convenience
pub mod server {
    pub use cpk_server::*;
}

pub mod rules;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use server::run_stdio;
