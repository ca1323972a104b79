//! Core value types shared by the executor, the worker pool and the aggregator.
mod endpoint;
mod result;

pub use endpoint::{EndpointConfig, HttpMethod};
pub use result::{RequestResult, RequestStatus};
