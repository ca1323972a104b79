use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{error, info};

use crate::auth::CredentialProvider;
use crate::domain::{EndpointConfig, RequestResult};
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{PoolPlan, RequestExecutor, run_pool};
use crate::metrics::{SummaryRow, spawn_collector, summarize};

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub results: Vec<RequestResult>,
    pub summary: Vec<SummaryRow>,
    pub elapsed: Duration,
}

impl RunReport {
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Drives one run: credential, worker pool, completion barrier, aggregation.
#[derive(Debug)]
pub struct RunCoordinator {
    plan: PoolPlan,
    endpoints: Arc<[EndpointConfig]>,
}

impl RunCoordinator {
    /// # Errors
    ///
    /// Returns an error when `endpoints` is empty.
    pub fn new(plan: PoolPlan, endpoints: Vec<EndpointConfig>) -> AppResult<Self> {
        if endpoints.is_empty() {
            return Err(AppError::validation(ValidationError::EmptyEndpointList));
        }
        Ok(Self {
            plan,
            endpoints: Arc::from(endpoints),
        })
    }

    #[must_use]
    pub const fn plan(&self) -> &PoolPlan {
        &self.plan
    }

    /// Fetches the credential once, runs every worker to completion and
    /// summarizes the collected results. No request is issued when the
    /// credential cannot be obtained.
    ///
    /// # Errors
    ///
    /// Returns an error when the credential provider fails, a worker panicked
    /// or the collector task failed.
    pub async fn execute(
        &self,
        provider: &dyn CredentialProvider,
        executor: Arc<dyn RequestExecutor>,
    ) -> AppResult<RunReport> {
        let credential = provider.fetch().await.map_err(|err| {
            error!("Failed to acquire credential: {}", err);
            err
        })?;

        info!(
            "Starting {} workers x {} requests across {} endpoint(s)",
            self.plan.concurrency,
            self.plan.per_worker,
            self.endpoints.len()
        );

        let (sink, collector) = spawn_collector(self.plan.effective_total());
        let started = Instant::now();
        let pool_result = run_pool(
            self.plan,
            Arc::clone(&self.endpoints),
            credential,
            executor,
            sink,
        )
        .await;
        let results = collector.finish().await?;
        let elapsed = started.elapsed();
        pool_result?;

        let summary = summarize(&results);
        Ok(RunReport {
            results,
            summary,
            elapsed,
        })
    }
}
