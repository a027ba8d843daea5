//! Check Dispatch Use Case
//!
//! Runs one check request against a validated registry:
//!
//! 1. **Resolve** the rule set (explicit selection, or the default rules)
//! 2. **Pre-process** through the before hook, if the plugin declared one
//! 3. **Invoke** every resolved handler concurrently, each with its own writer
//! 4. **Aggregate** annotations by rule id, then emission order
//!
//! Handler failures are scoped to their rule. Cancellation, timeout, an
//! unknown rule id or a failing before hook reject the whole request.

use crate::registry::SpecRegistry;
use cpk_domain::error::{Error, Result};
use cpk_domain::{
    Annotation, CheckContext, CheckRequest, CheckResponse, ExecutionFailure, ResponseWriter,
    RuleHandler, RuleSpec,
};
use futures::future::join_all;
use itertools::Itertools;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tokio_util::task::AbortOnDropHandle;
use tracing::{Instrument, debug, debug_span, warn};

/// Default number of rule handlers allowed to run at once
pub const DEFAULT_MAX_CONCURRENT_RULES: usize = 16;

/// Tuning knobs for request dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Upper bound on handlers running at the same time
    pub max_concurrent_rules: usize,
    /// Budget for a whole request, `None` for no limit
    pub request_timeout: Option<Duration>,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            max_concurrent_rules: DEFAULT_MAX_CONCURRENT_RULES,
            request_timeout: None,
        }
    }
}

/// Outcome of one handler invocation
struct RuleOutcome {
    rule_id: String,
    result: Result<Vec<Annotation>>,
}

/// Resolve the rules a request applies to, sorted by id
///
/// An empty selection means every default rule. Otherwise exactly the
/// selected rules run; ids that match no rule reject the request.
pub fn resolve_rules<'a>(
    registry: &'a SpecRegistry,
    selected: &[String],
) -> Result<Vec<&'a RuleSpec>> {
    if selected.is_empty() {
        return Ok(registry.default_rules().collect());
    }

    let unknown: Vec<String> = selected
        .iter()
        .filter(|id| registry.rule(id).is_none())
        .unique()
        .sorted_unstable()
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(Error::UnknownRuleIds { ids: unknown });
    }

    Ok(selected
        .iter()
        .unique()
        .filter_map(|id| registry.rule(id))
        .sorted_unstable_by(|a, b| a.id.cmp(&b.id))
        .collect())
}

/// Check service - dispatches requests to rule handlers
#[derive(Debug, Clone)]
pub struct CheckService {
    registry: Arc<SpecRegistry>,
    options: DispatchOptions,
}

impl CheckService {
    /// Create a service over a validated registry
    pub fn new(registry: Arc<SpecRegistry>) -> Self {
        Self {
            registry,
            options: DispatchOptions::default(),
        }
    }

    /// Override dispatch options
    pub fn with_options(mut self, options: DispatchOptions) -> Self {
        self.options = options;
        self
    }

    /// The registry this service dispatches against
    pub fn registry(&self) -> &Arc<SpecRegistry> {
        &self.registry
    }

    /// Run a check request
    ///
    /// Handlers see a child of the caller's token. It is cancelled when this
    /// call returns, times out or is dropped, so synchronous handlers polling
    /// [`CheckContext::ensure_active`] stop even after their task was detached.
    pub async fn check(&self, ctx: CheckContext, request: CheckRequest) -> Result<CheckResponse> {
        let rules: Vec<(String, Arc<dyn RuleHandler>)> =
            resolve_rules(&self.registry, &request.rule_ids)?
                .into_iter()
                .map(|rule| (rule.id.clone(), Arc::clone(&rule.handler)))
                .collect();
        debug!(
            rules = %rules.iter().map(|(id, _)| id.as_str()).join(","),
            files = request.files.len(),
            "Resolved check request"
        );

        let caller = ctx.token().clone();
        let request_token = caller.child_token();
        let _request_guard = request_token.clone().drop_guard();

        let work = self.run(caller, request_token, ctx, request, rules);
        match self.options.request_timeout {
            Some(timeout) => tokio::time::timeout(timeout, work)
                .await
                .map_err(|_| Error::Timeout {
                    timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                })?,
            None => work.await,
        }
    }

    async fn run(
        &self,
        caller: CancellationToken,
        request_token: CancellationToken,
        ctx: CheckContext,
        request: CheckRequest,
        rules: Vec<(String, Arc<dyn RuleHandler>)>,
    ) -> Result<CheckResponse> {
        ensure_active(&caller)?;

        let (ctx, request) = match self.registry.before() {
            Some(hook) => tokio::select! {
                biased;
                () = caller.cancelled() => return Err(Error::Cancelled),
                result = hook.before(ctx, request) => result.map_err(|e| match e {
                    Error::Cancelled | Error::BeforeHook { .. } => e,
                    other => Error::before_hook_with_source(other.to_string(), other),
                })?,
            },
            None => (ctx, request),
        };
        ensure_active(&caller)?;

        // The caller's token governs the request even if the hook swapped the context.
        let ctx = Arc::new(ctx.with_cancel_token(request_token));
        let request = Arc::new(request);
        let permits = Arc::new(Semaphore::new(
            self.options
                .max_concurrent_rules
                .clamp(1, Semaphore::MAX_PERMITS),
        ));

        let (rule_ids, tasks): (Vec<String>, Vec<AbortOnDropHandle<RuleOutcome>>) = rules
            .into_iter()
            .map(|(rule_id, handler)| {
                let span = debug_span!("rule", rule_id = %rule_id);
                let task = tokio::spawn(
                    invoke_when_permitted(
                        Arc::clone(&permits),
                        rule_id.clone(),
                        handler,
                        Arc::clone(&ctx),
                        Arc::clone(&request),
                    )
                    .instrument(span),
                );
                (rule_id, AbortOnDropHandle::new(task))
            })
            .unzip();

        let joined = tokio::select! {
            biased;
            () = caller.cancelled() => return Err(Error::Cancelled),
            joined = join_all(tasks) => joined,
        };
        ensure_active(&caller)?;

        let outcomes: Vec<RuleOutcome> = rule_ids
            .into_iter()
            .zip(joined)
            .map(|(rule_id, joined)| match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(rule_id = %rule_id, error = %e, "Rule handler panicked");
                    RuleOutcome {
                        rule_id,
                        result: Err(Error::handler(format!("handler panicked: {e}"))),
                    }
                }
            })
            .collect();

        if outcomes
            .iter()
            .any(|o| matches!(o.result, Err(Error::Cancelled)))
        {
            return Err(Error::Cancelled);
        }
        Ok(aggregate(outcomes))
    }
}

fn ensure_active(token: &CancellationToken) -> Result<()> {
    if token.is_cancelled() {
        Err(Error::Cancelled)
    } else {
        Ok(())
    }
}

async fn invoke_when_permitted(
    permits: Arc<Semaphore>,
    rule_id: String,
    handler: Arc<dyn RuleHandler>,
    ctx: Arc<CheckContext>,
    request: Arc<CheckRequest>,
) -> RuleOutcome {
    let Ok(_permit) = permits.acquire_owned().await else {
        return RuleOutcome {
            rule_id,
            result: Err(Error::Cancelled),
        };
    };
    invoke(rule_id, handler.as_ref(), &ctx, &request).await
}

async fn invoke(
    rule_id: String,
    handler: &dyn RuleHandler,
    ctx: &CheckContext,
    request: &CheckRequest,
) -> RuleOutcome {
    let writer = ResponseWriter::new(rule_id.as_str());
    let result = match handler.handle(ctx, &writer, request).await {
        Ok(()) => Ok(writer.into_annotations()),
        Err(e) => {
            // Partial output of a failed handler is discarded.
            if !matches!(e, Error::Cancelled) {
                warn!(rule_id = %rule_id, error = %e, "Rule handler failed");
            }
            Err(e)
        }
    };
    RuleOutcome { rule_id, result }
}

/// Merge per-rule outcomes in rule id order
fn aggregate(mut outcomes: Vec<RuleOutcome>) -> CheckResponse {
    outcomes.sort_by(|a, b| a.rule_id.cmp(&b.rule_id));

    let mut response = CheckResponse::default();
    for outcome in outcomes {
        match outcome.result {
            Ok(annotations) => response.annotations.extend(annotations),
            Err(e) => response.execution_failures.push(ExecutionFailure {
                rule_id: outcome.rule_id,
                message: e.to_string(),
            }),
        }
    }
    debug!(
        annotations = response.annotations.len(),
        failures = response.execution_failures.len(),
        "Check request complete"
    );
    response
}
