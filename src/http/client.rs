use std::time::Duration;

use reqwest::Client;
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Builds the shared HTTP client. Without `request_timeout` a stalled request
/// blocks its worker indefinitely.
///
/// # Errors
///
/// Returns an error when the TLS backend or client cannot be initialised.
pub fn build_client(request_timeout: Option<Duration>, max_idle_per_host: usize) -> AppResult<Client> {
    let mut client_builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .pool_max_idle_per_host(max_idle_per_host);

    if let Some(timeout) = request_timeout {
        client_builder = client_builder.timeout(timeout);
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed { source: err })
    })
}
