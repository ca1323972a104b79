use async_trait::async_trait;
use reqwest::Client;

use crate::config::types::AuthConfig;
use crate::error::{AppError, AppResult, AuthError, ConfigError};

use super::credential::Credential;
use super::token_endpoint::TokenEndpointProvider;

#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn fetch(&self) -> AppResult<Credential>;
}

/// Provider for a token known before the run starts.
#[derive(Debug)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticTokenProvider {
    async fn fetch(&self) -> AppResult<Credential> {
        Ok(Credential::new(&self.token)?)
    }
}

/// Picks the credential provider: a CLI/env token wins over the `[auth]`
/// section.
///
/// # Errors
///
/// Returns an error when no source is configured, sources conflict, or a
/// referenced environment variable is missing.
pub fn provider_from_config(
    cli_token: Option<&str>,
    auth: Option<&AuthConfig>,
    client: &Client,
) -> AppResult<Box<dyn CredentialProvider>> {
    if let Some(token) = cli_token {
        tracing::debug!("Using bearer token from the command line/environment.");
        return Ok(Box::new(StaticTokenProvider::new(token)));
    }

    let auth = auth.ok_or_else(|| AppError::auth(AuthError::MissingCredential))?;
    let conflict = match (&auth.token, &auth.token_env, &auth.url) {
        (Some(_), Some(_), _) => Some(("auth.token", "auth.token_env")),
        (Some(_), None, Some(_)) => Some(("auth.token", "auth.url")),
        (None, Some(_), Some(_)) => Some(("auth.token_env", "auth.url")),
        _ => None,
    };
    if let Some((left, right)) = conflict {
        return Err(AppError::config(ConfigError::Conflict { left, right }));
    }

    if let Some(token) = auth.token.as_deref() {
        return Ok(Box::new(StaticTokenProvider::new(token)));
    }
    if let Some(var) = auth.token_env.as_deref() {
        let token = std::env::var(var).map_err(|_err| {
            AppError::auth(AuthError::MissingEnvToken {
                var: var.to_owned(),
            })
        })?;
        return Ok(Box::new(StaticTokenProvider::new(token)));
    }
    if let Some(url) = auth.url.as_deref() {
        tracing::debug!("Fetching bearer token from {}", url);
        return Ok(Box::new(TokenEndpointProvider::new(
            client.clone(),
            url,
            auth.username.clone().unwrap_or_default(),
            auth.password.clone().unwrap_or_default(),
            auth.token_field.clone(),
        )));
    }

    Err(AppError::auth(AuthError::MissingCredential))
}
