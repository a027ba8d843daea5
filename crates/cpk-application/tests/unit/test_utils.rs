//! Shared fixtures for application tests

use async_trait::async_trait;
use cpk_application::handlers::FileRuleHandler;
use cpk_domain::ports::FnRuleHandler;
use cpk_domain::{
    CategorySpec, CheckContext, CheckRequest, Error, ResponseWriter, Result, RuleHandler,
    RuleSpec, RuleType,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Rule whose handler does nothing
pub fn noop_rule(id: &str) -> RuleSpec {
    RuleSpec::new(
        id,
        "Checks nothing.",
        RuleType::Lint,
        FnRuleHandler::new(|_, _, _| Ok(())),
    )
}

/// Rule that emits `messages` in order
pub fn emitting_rule(id: &str, messages: &[&str]) -> RuleSpec {
    RuleSpec::new(
        id,
        "Emits fixed annotations.",
        RuleType::Lint,
        Emitting {
            messages: messages.iter().map(|m| (*m).to_string()).collect(),
            delay: Duration::ZERO,
            fail_after: false,
        },
    )
}

/// Rule that sleeps before emitting, to invert completion order
pub fn delayed_rule(id: &str, message: &str, delay: Duration) -> RuleSpec {
    RuleSpec::new(
        id,
        "Emits after a delay.",
        RuleType::Lint,
        Emitting {
            messages: vec![message.to_string()],
            delay,
            fail_after: false,
        },
    )
}

/// Rule that emits one annotation and then fails
pub fn failing_rule(id: &str) -> RuleSpec {
    RuleSpec::new(
        id,
        "Fails midway.",
        RuleType::Lint,
        Emitting {
            messages: vec!["partial".to_string()],
            delay: Duration::ZERO,
            fail_after: true,
        },
    )
}

/// Rule that waits until the request is cancelled
pub fn blocking_rule(id: &str) -> RuleSpec {
    RuleSpec::new(id, "Never finishes on its own.", RuleType::Lint, Blocking)
}

/// What a [`stepping_rule`] handler observed
#[derive(Debug, Default)]
pub struct StepProgress {
    pub steps: AtomicUsize,
    pub saw_cancel: AtomicBool,
    pub finished: AtomicBool,
}

impl StepProgress {
    /// Wait up to two seconds for the handler to return
    pub async fn wait_finished(&self) {
        for _ in 0..200 {
            if self.finished.load(Ordering::SeqCst) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

/// Rule whose synchronous per-file callback sleeps through `steps` steps,
/// polling the context between them
pub fn stepping_rule(
    id: &str,
    steps: usize,
    step: Duration,
    progress: Arc<StepProgress>,
) -> RuleSpec {
    RuleSpec::new(
        id,
        "Blocks its worker between steps.",
        RuleType::Lint,
        FileRuleHandler::new(move |ctx, _writer, _request, _file| {
            let mut outcome = Ok(());
            for _ in 0..steps {
                if ctx.is_cancelled() {
                    progress.saw_cancel.store(true, Ordering::SeqCst);
                    outcome = Err(Error::Cancelled);
                    break;
                }
                std::thread::sleep(step);
                progress.steps.fetch_add(1, Ordering::SeqCst);
            }
            progress.finished.store(true, Ordering::SeqCst);
            outcome
        }),
    )
}

/// Category fixture
pub fn category(id: &str) -> CategorySpec {
    CategorySpec::new(id, "Groups rules.")
}

struct Emitting {
    messages: Vec<String>,
    delay: Duration,
    fail_after: bool,
}

#[async_trait]
impl RuleHandler for Emitting {
    async fn handle(
        &self,
        _ctx: &CheckContext,
        writer: &ResponseWriter,
        _request: &CheckRequest,
    ) -> Result<()> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        for message in &self.messages {
            writer.add_annotation(message.clone(), None);
        }
        if self.fail_after {
            return Err(Error::handler("descriptor could not be resolved"));
        }
        Ok(())
    }
}

struct Blocking;

#[async_trait]
impl RuleHandler for Blocking {
    async fn handle(
        &self,
        ctx: &CheckContext,
        _writer: &ResponseWriter,
        _request: &CheckRequest,
    ) -> Result<()> {
        ctx.cancelled().await;
        Err(Error::Cancelled)
    }
}
