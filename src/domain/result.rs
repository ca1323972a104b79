use std::fmt;

use super::HttpMethod;

/// Outcome classification for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    /// A response arrived with a status code below 400.
    Success(u16),
    /// A response arrived with a status code of 400 or above.
    HttpError(u16),
    /// No response arrived; carries the transport error code or `ERROR`.
    TransportError(String),
}

pub(crate) const GENERIC_TRANSPORT_ERROR: &str = "ERROR";

impl RequestStatus {
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        if code < 400 {
            RequestStatus::Success(code)
        } else {
            RequestStatus::HttpError(code)
        }
    }

    #[must_use]
    pub fn transport(code: Option<&str>) -> Self {
        RequestStatus::TransportError(code.unwrap_or(GENERIC_TRANSPORT_ERROR).to_owned())
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        match self {
            RequestStatus::Success(_) => true,
            RequestStatus::HttpError(_) | RequestStatus::TransportError(_) => false,
        }
    }

    #[must_use]
    pub const fn code(&self) -> Option<u16> {
        match self {
            RequestStatus::Success(code) | RequestStatus::HttpError(code) => Some(*code),
            RequestStatus::TransportError(_) => None,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Success(code) | RequestStatus::HttpError(code) => write!(f, "{}", code),
            RequestStatus::TransportError(code) => f.write_str(code),
        }
    }
}

/// Record of one completed request attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestResult {
    pub id: u64,
    pub name: String,
    pub method: HttpMethod,
    pub status: RequestStatus,
    pub latency_ms: u64,
}
