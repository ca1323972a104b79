use std::error::Error as _;
use std::io::ErrorKind;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::time::Instant;
use tracing::debug;

use crate::auth::Credential;
use crate::body::BodyRegistry;
use crate::domain::{EndpointConfig, RequestResult, RequestStatus};

/// Issues one request and reports its outcome. Implementations never fail:
/// every error path resolves to a [`RequestResult`].
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(
        &self,
        id: u64,
        endpoint: &EndpointConfig,
        credential: &Credential,
    ) -> RequestResult;
}

#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
    bodies: BodyRegistry,
}

impl HttpExecutor {
    #[must_use]
    pub const fn new(client: Client, bodies: BodyRegistry) -> Self {
        Self { client, bodies }
    }

    async fn send(&self, endpoint: &EndpointConfig, credential: &Credential) -> RequestStatus {
        let mut request = self
            .client
            .request(endpoint.method.to_reqwest(), endpoint.url.clone())
            .header(AUTHORIZATION, credential.bearer());

        if let Some(builder) = endpoint.active_body_builder() {
            match self.bodies.build(builder) {
                Some(body) => {
                    request = request.header(CONTENT_TYPE, "application/json").body(body);
                }
                None => debug!("Body builder '{}' is not registered; sending empty body", builder),
            }
        }

        match request.send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                if let Err(err) = drain_response_body(response).await {
                    debug!("Failed to read response body from {}: {}", endpoint.url, err);
                }
                RequestStatus::from_code(code)
            }
            Err(err) => {
                debug!("Request to {} failed: {}", endpoint.url, err);
                RequestStatus::transport(transport_error_code(&err))
            }
        }
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(
        &self,
        id: u64,
        endpoint: &EndpointConfig,
        credential: &Credential,
    ) -> RequestResult {
        let start = Instant::now();
        let status = self.send(endpoint, credential).await;
        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        RequestResult {
            id,
            name: endpoint.name.clone(),
            method: endpoint.method,
            status,
            latency_ms,
        }
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}

/// Maps a transport failure to a POSIX-style error code, if one can be found.
pub(super) fn transport_error_code(err: &reqwest::Error) -> Option<&'static str> {
    if err.is_timeout() {
        return Some("ETIMEDOUT");
    }

    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<std::io::Error>() {
            return io_error_code(io_err.kind());
        }
        source = cause.source();
    }
    None
}

pub(super) const fn io_error_code(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::ConnectionRefused => Some("ECONNREFUSED"),
        ErrorKind::ConnectionReset => Some("ECONNRESET"),
        ErrorKind::ConnectionAborted => Some("ECONNABORTED"),
        ErrorKind::TimedOut => Some("ETIMEDOUT"),
        ErrorKind::NotConnected => Some("ENOTCONN"),
        ErrorKind::AddrNotAvailable => Some("EADDRNOTAVAIL"),
        ErrorKind::BrokenPipe => Some("EPIPE"),
        ErrorKind::UnexpectedEof => Some("ECONNRESET"),
        _ => None,
    }
}
