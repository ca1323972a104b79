use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Worker {worker} panicked: {source}")]
    WorkerPanicked {
        worker: usize,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("Result collector failed: {source}")]
    CollectorFailed {
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("Request plan overflowed: {concurrency} workers x {per_worker} requests.")]
    PlanOverflow { concurrency: usize, per_worker: u64 },
}
