//! Handler adapters
//!
//! Each adapter fixes the granularity a rule works at and turns a plain
//! synchronous callback into a [`RuleHandler`]. Import-only files are never
//! visited, cancellation is checked before every element, and the first
//! callback error ends the invocation.

use super::walk::{FieldRef, MessageRef, walk_fields, walk_messages};
use async_trait::async_trait;
use cpk_domain::error::Result;
use cpk_domain::{CheckContext, CheckRequest, FileDescriptor, ResponseWriter, RuleHandler};

/// Runs a callback once per target file
pub struct FileRuleHandler<F> {
    check: F,
}

impl<F> FileRuleHandler<F>
where
    F: Fn(&CheckContext, &ResponseWriter, &CheckRequest, &FileDescriptor) -> Result<()>
        + Send
        + Sync,
{
    /// Wrap a per-file callback
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

#[async_trait]
impl<F> RuleHandler for FileRuleHandler<F>
where
    F: Fn(&CheckContext, &ResponseWriter, &CheckRequest, &FileDescriptor) -> Result<()>
        + Send
        + Sync,
{
    async fn handle(
        &self,
        ctx: &CheckContext,
        writer: &ResponseWriter,
        request: &CheckRequest,
    ) -> Result<()> {
        for file in request.files.target_files() {
            ctx.ensure_active()?;
            (self.check)(ctx, writer, request, file)?;
        }
        Ok(())
    }
}

/// Runs a callback once per message, nested messages included
pub struct MessageRuleHandler<F> {
    check: F,
}

impl<F> MessageRuleHandler<F>
where
    F: Fn(&CheckContext, &ResponseWriter, &CheckRequest, MessageRef<'_>) -> Result<()>
        + Send
        + Sync,
{
    /// Wrap a per-message callback
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

#[async_trait]
impl<F> RuleHandler for MessageRuleHandler<F>
where
    F: Fn(&CheckContext, &ResponseWriter, &CheckRequest, MessageRef<'_>) -> Result<()>
        + Send
        + Sync,
{
    async fn handle(
        &self,
        ctx: &CheckContext,
        writer: &ResponseWriter,
        request: &CheckRequest,
    ) -> Result<()> {
        for file in request.files.target_files() {
            walk_messages(file, |message| {
                ctx.ensure_active()?;
                (self.check)(ctx, writer, request, message)
            })?;
        }
        Ok(())
    }
}

/// Runs a callback once per field of every message
pub struct FieldRuleHandler<F> {
    check: F,
}

impl<F> FieldRuleHandler<F>
where
    F: Fn(&CheckContext, &ResponseWriter, &CheckRequest, FieldRef<'_>) -> Result<()>
        + Send
        + Sync,
{
    /// Wrap a per-field callback
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

#[async_trait]
impl<F> RuleHandler for FieldRuleHandler<F>
where
    F: Fn(&CheckContext, &ResponseWriter, &CheckRequest, FieldRef<'_>) -> Result<()>
        + Send
        + Sync,
{
    async fn handle(
        &self,
        ctx: &CheckContext,
        writer: &ResponseWriter,
        request: &CheckRequest,
    ) -> Result<()> {
        for file in request.files.target_files() {
            walk_fields(file, |field| {
                ctx.ensure_active()?;
                (self.check)(ctx, writer, request, field)
            })?;
        }
        Ok(())
    }
}

/// Runs a callback for every target file that also exists in the against set
///
/// Files are paired by name. Requests without against files have nothing to
/// compare and produce no calls.
pub struct FilePairRuleHandler<F> {
    check: F,
}

impl<F> FilePairRuleHandler<F>
where
    F: Fn(
            &CheckContext,
            &ResponseWriter,
            &CheckRequest,
            &FileDescriptor,
            &FileDescriptor,
        ) -> Result<()>
        + Send
        + Sync,
{
    /// Wrap a per-file-pair callback receiving `(file, against_file)`
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

#[async_trait]
impl<F> RuleHandler for FilePairRuleHandler<F>
where
    F: Fn(
            &CheckContext,
            &ResponseWriter,
            &CheckRequest,
            &FileDescriptor,
            &FileDescriptor,
        ) -> Result<()>
        + Send
        + Sync,
{
    async fn handle(
        &self,
        ctx: &CheckContext,
        writer: &ResponseWriter,
        request: &CheckRequest,
    ) -> Result<()> {
        let Some(against_files) = &request.against_files else {
            return Ok(());
        };
        for file in request.files.target_files() {
            let Some(against) = against_files
                .target_files()
                .find(|candidate| candidate.name == file.name)
            else {
                continue;
            };
            ctx.ensure_active()?;
            (self.check)(ctx, writer, request, file, against)?;
        }
        Ok(())
    }
}
