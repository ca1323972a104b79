//! HTTP request execution and the worker pool.
mod client;
mod executor;
mod pool;


pub use client::build_client;
pub use executor::{HttpExecutor, RequestExecutor};
pub use pool::{PoolPlan, endpoint_for, run_pool, worker_range};
