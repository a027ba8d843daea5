//! Before Hook Port
//!
//! Optional pre-processing that runs once per check request. Whatever it
//! returns replaces the original context and request for every handler.

use crate::context::CheckContext;
use crate::error::Result;
use crate::value_objects::CheckRequest;
use async_trait::async_trait;

/// Pre-processing step run before any rule handler
#[async_trait]
pub trait BeforeHook: Send + Sync {
    /// Transform the context and request; an error rejects the request
    async fn before(
        &self,
        ctx: CheckContext,
        request: CheckRequest,
    ) -> Result<(CheckContext, CheckRequest)>;
}

/// Adapts a synchronous closure into a [`BeforeHook`]
pub struct FnBeforeHook<F>(pub F);

impl<F> FnBeforeHook<F>
where
    F: Fn(CheckContext, CheckRequest) -> Result<(CheckContext, CheckRequest)> + Send + Sync,
{
    /// Wrap `f`
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> BeforeHook for FnBeforeHook<F>
where
    F: Fn(CheckContext, CheckRequest) -> Result<(CheckContext, CheckRequest)> + Send + Sync,
{
    async fn before(
        &self,
        ctx: CheckContext,
        request: CheckRequest,
    ) -> Result<(CheckContext, CheckRequest)> {
        (self.0)(ctx, request)
    }
}
