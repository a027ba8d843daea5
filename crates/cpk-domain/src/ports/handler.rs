//! Rule Handler Port
//!
//! The boundary the dispatch engine calls across. A handler receives the
//! request context, a writer scoped to its rule, and the request carrying the
//! descriptor tree. Which elements it visits (whole set, each file, each
//! field) is decided by the handler itself, usually through one of the
//! walking adapters in the application layer.
//!
//! ## Usage
//!
//! ```
//! use cpk_domain::ports::RuleHandler;
//! use cpk_domain::{CheckContext, CheckRequest, ResponseWriter, Result};
//!
//! struct NoEmptyPackage;
//!
//! #[async_trait::async_trait]
//! impl RuleHandler for NoEmptyPackage {
//!     async fn handle(
//!         &self,
//!         _ctx: &CheckContext,
//!         writer: &ResponseWriter,
//!         request: &CheckRequest,
//!     ) -> Result<()> {
//!         for file in request.files.target_files() {
//!             if file.package.is_empty() {
//!                 writer.add_file_annotation("Files must declare a package.", &file.name);
//!             }
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use crate::context::CheckContext;
use crate::error::Result;
use crate::value_objects::CheckRequest;
use crate::writer::ResponseWriter;
use async_trait::async_trait;

/// Executable logic bound to a rule
///
/// Handlers only emit annotations through `writer`; they must not keep state
/// between invocations. Returning an error discards whatever the handler
/// already wrote and reports the rule as an execution failure.
#[async_trait]
pub trait RuleHandler: Send + Sync {
    /// Inspect `request` and record findings in `writer`
    async fn handle(
        &self,
        ctx: &CheckContext,
        writer: &ResponseWriter,
        request: &CheckRequest,
    ) -> Result<()>;
}

/// Adapts a synchronous closure into a [`RuleHandler`]
pub struct FnRuleHandler<F>(pub F);

impl<F> FnRuleHandler<F>
where
    F: Fn(&CheckContext, &ResponseWriter, &CheckRequest) -> Result<()> + Send + Sync,
{
    /// Wrap `f`
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> RuleHandler for FnRuleHandler<F>
where
    F: Fn(&CheckContext, &ResponseWriter, &CheckRequest) -> Result<()> + Send + Sync,
{
    async fn handle(
        &self,
        ctx: &CheckContext,
        writer: &ResponseWriter,
        request: &CheckRequest,
    ) -> Result<()> {
        (self.0)(ctx, writer, request)
    }
}
