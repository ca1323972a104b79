use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::{debug, error, info, warn};

use crate::args::{PositiveU64, PositiveUsize};
use crate::auth::Credential;
use crate::domain::EndpointConfig;
use crate::error::{AppError, AppResult, HttpError, ValidationError};
use crate::metrics::ResultSink;

use super::executor::RequestExecutor;

/// How the requested total is split across workers.
///
/// Each worker runs `ceil(total / concurrency)` requests, so the effective
/// total may exceed the requested one when it does not divide evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolPlan {
    pub concurrency: usize,
    pub per_worker: u64,
    pub requested: u64,
    pub delay: Duration,
}

impl PoolPlan {
    /// # Errors
    ///
    /// Returns an error when `concurrency * per_worker` does not fit in a `u64`.
    pub fn new(
        concurrency: PositiveUsize,
        total_requests: PositiveU64,
        delay: Duration,
    ) -> AppResult<Self> {
        let workers = u64::try_from(concurrency.get()).unwrap_or(u64::MAX);
        let per_worker = total_requests.get().div_ceil(workers);
        let plan = Self {
            concurrency: concurrency.get(),
            per_worker,
            requested: total_requests.get(),
            delay,
        };
        if workers.checked_mul(per_worker).is_none() {
            return Err(AppError::http(HttpError::PlanOverflow {
                concurrency: plan.concurrency,
                per_worker,
            }));
        }
        Ok(plan)
    }

    /// Number of requests that will actually be issued.
    #[must_use]
    pub fn effective_total(&self) -> u64 {
        u64::try_from(self.concurrency)
            .ok()
            .and_then(|workers| workers.checked_mul(self.per_worker))
            .unwrap_or(u64::MAX)
    }
}

/// Global ids owned by `worker`: `[worker * per_worker, (worker + 1) * per_worker)`.
#[must_use]
pub fn worker_range(worker: usize, per_worker: u64) -> Option<Range<u64>> {
    let index = u64::try_from(worker).ok()?;
    let start = index.checked_mul(per_worker)?;
    let end = start.checked_add(per_worker)?;
    Some(start..end)
}

/// Round-robin over the global id space, independent of the worker count.
#[must_use]
pub fn endpoint_for(endpoints: &[EndpointConfig], id: u64) -> Option<&EndpointConfig> {
    let len = u64::try_from(endpoints.len()).ok()?;
    let index = id.checked_rem(len)?;
    endpoints.get(usize::try_from(index).ok()?)
}

/// Runs every worker to completion. Results go to `sink`; the sink is dropped
/// when the last worker finishes so the collector can drain.
///
/// # Errors
///
/// Returns an error when the endpoint list is empty or a worker task panicked.
/// Every other worker still runs to completion before the error is returned.
pub async fn run_pool(
    plan: PoolPlan,
    endpoints: Arc<[EndpointConfig]>,
    credential: Credential,
    executor: Arc<dyn RequestExecutor>,
    sink: ResultSink,
) -> AppResult<()> {
    if endpoints.is_empty() {
        return Err(AppError::validation(ValidationError::EmptyEndpointList));
    }
    if plan.effective_total() > plan.requested {
        warn!(
            "{} requests do not divide across {} workers; issuing {} ({} per worker).",
            plan.requested,
            plan.concurrency,
            plan.effective_total(),
            plan.per_worker
        );
    }

    let mut handles = Vec::with_capacity(plan.concurrency);
    for worker in 0..plan.concurrency {
        let Some(range) = worker_range(worker, plan.per_worker) else {
            return Err(AppError::http(HttpError::PlanOverflow {
                concurrency: plan.concurrency,
                per_worker: plan.per_worker,
            }));
        };
        let endpoints = Arc::clone(&endpoints);
        let credential = credential.clone();
        let executor = Arc::clone(&executor);
        let sink = sink.clone();
        let delay = plan.delay;

        let handle = tokio::spawn(async move {
            run_worker(
                worker,
                range,
                &endpoints,
                &credential,
                executor.as_ref(),
                &sink,
                delay,
            )
            .await;
        });
        handles.push(handle);
    }
    drop(sink);

    let mut first_failure = None;
    for (worker, handle) in handles.into_iter().enumerate() {
        if let Err(err) = handle.await {
            error!("Worker {} terminated abnormally: {}", worker, err);
            if first_failure.is_none() {
                first_failure = Some(AppError::http(HttpError::WorkerPanicked {
                    worker,
                    source: err,
                }));
            }
        }
    }

    first_failure.map_or(Ok(()), Err)
}

async fn run_worker(
    worker: usize,
    range: Range<u64>,
    endpoints: &[EndpointConfig],
    credential: &Credential,
    executor: &dyn RequestExecutor,
    sink: &ResultSink,
    delay: Duration,
) {
    let started = Instant::now();
    let mut ids = range.clone().peekable();
    while let Some(id) = ids.next() {
        let Some(endpoint) = endpoint_for(endpoints, id) else {
            break;
        };
        let result = executor.execute(id, endpoint, credential).await;
        info!(
            "[worker {}] #{} {} {} -> {} ({}ms)",
            worker, result.id, result.method, result.name, result.status, result.latency_ms
        );
        if !sink.submit(result).await {
            warn!("[worker {}] result collector closed; stopping early", worker);
            return;
        }
        if !delay.is_zero() && ids.peek().is_some() {
            sleep(delay).await;
        }
    }
    debug!(
        "[worker {}] finished ids {}..{} in {}ms",
        worker,
        range.start,
        range.end,
        started.elapsed().as_millis()
    );
}
