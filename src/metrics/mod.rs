//! Result collection and per-endpoint aggregation.
mod collector;
mod summary;


pub use collector::{ResultCollector, ResultSink, spawn_collector};
pub use summary::{SummaryRow, format_latency_x100, summarize};
