//! Core library for the `authstress` CLI.
//!
//! A fixed pool of workers issues a configured number of bearer-authenticated
//! HTTP requests round-robin across named endpoints. Results flow through a
//! single collector into a per-endpoint summary and a CSV export. The binary
//! is the primary interface; library APIs may change with it.
pub mod app;
pub mod args;
pub mod auth;
pub mod body;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod logger;
pub mod metrics;

mod entry;

#[cfg(test)]
mod test_support;

pub use entry::run;
