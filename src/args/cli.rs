use clap::Parser;
use std::time::Duration;

use super::defaults::DEFAULT_OUTPUT;
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_positive_u64, parse_positive_usize,
};
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load tester for authenticated APIs - fixed worker pool, round-robin endpoints, per-endpoint summary and CSV export."
)]
pub struct RunArgs {
    /// Path to config file (TOML or JSON) holding endpoints, bodies and auth
    #[arg(long, short = 'f')]
    pub config: Option<String>,

    /// Number of concurrent workers
    #[arg(long, short = 'c', default_value = "10", value_parser = parse_positive_usize)]
    pub concurrency: PositiveUsize,

    /// Total number of requests, rounded up to a multiple of the worker count
    #[arg(long, short = 'n', default_value = "50", value_parser = parse_positive_u64)]
    pub requests: PositiveU64,

    /// Delay between consecutive requests of one worker, in milliseconds
    #[arg(long = "delay-ms", short = 'd', default_value_t = 0)]
    pub delay_ms: u64,

    /// CSV file receiving one row per request
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Also write summary and raw results as JSON to this path
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Bearer token used for every request (skips the [auth] section)
    #[arg(long, env = "AUTHSTRESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Per-request timeout (supports ms/s/m/h); unset means wait indefinitely
    #[arg(long = "request-timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Enable debug logging (overridden by AUTHSTRESS_LOG / RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
