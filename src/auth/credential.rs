use std::fmt;
use std::sync::Arc;

use reqwest::header::HeaderValue;

use crate::error::AuthError;

/// Opaque bearer token. Cloning is cheap; `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(Arc<str>);

impl Credential {
    /// Wraps a raw token after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error when the token is empty or cannot be sent in an
    /// `Authorization` header.
    pub fn new(token: &str) -> Result<Self, AuthError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }
        if HeaderValue::from_str(&format!("Bearer {}", token)).is_err() {
            return Err(AuthError::InvalidTokenCharacters);
        }
        Ok(Self(Arc::from(token)))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
