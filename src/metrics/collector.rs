use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::RequestResult;
use crate::error::{AppError, AppResult, HttpError};

const RESULT_CHANNEL_CAPACITY: usize = 1024;
const MAX_PREALLOCATED_RESULTS: usize = 1 << 20;

/// Append-only handle held by workers. Workers can submit results but never
/// read the collection.
#[derive(Debug, Clone)]
pub struct ResultSink {
    tx: mpsc::Sender<RequestResult>,
}

impl ResultSink {
    /// Returns `false` once the collector has gone away.
    pub async fn submit(&self, result: RequestResult) -> bool {
        self.tx.send(result).await.is_ok()
    }
}

/// Single task owning the result sequence. It stops once every
/// [`ResultSink`] clone has been dropped.
#[derive(Debug)]
pub struct ResultCollector {
    handle: JoinHandle<Vec<RequestResult>>,
}

impl ResultCollector {
    /// Waits for all sinks to close and returns results in arrival order.
    ///
    /// # Errors
    ///
    /// Returns an error when the collector task panicked.
    pub async fn finish(self) -> AppResult<Vec<RequestResult>> {
        self.handle
            .await
            .map_err(|err| AppError::http(HttpError::CollectorFailed { source: err }))
    }
}

#[must_use]
pub fn spawn_collector(expected: u64) -> (ResultSink, ResultCollector) {
    let (tx, mut rx) = mpsc::channel::<RequestResult>(RESULT_CHANNEL_CAPACITY);
    let capacity = usize::try_from(expected)
        .unwrap_or(MAX_PREALLOCATED_RESULTS)
        .min(MAX_PREALLOCATED_RESULTS);

    let handle = tokio::spawn(async move {
        let mut results = Vec::with_capacity(capacity);
        while let Some(result) = rx.recv().await {
            results.push(result);
        }
        results
    });

    (ResultSink { tx }, ResultCollector { handle })
}
