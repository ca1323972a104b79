use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, AppResult, AuthError};

use super::credential::Credential;
use super::provider::CredentialProvider;

const DEFAULT_TOKEN_FIELD: &str = "access_token";
const FALLBACK_TOKEN_FIELD: &str = "token";

/// Logs in by POSTing `{"username", "password"}` as JSON and reads the token
/// from the response. `token_field` may be a dotted path such as `data.jwt`.
#[derive(Debug)]
pub struct TokenEndpointProvider {
    client: Client,
    url: String,
    username: String,
    password: String,
    token_field: Option<String>,
}

impl TokenEndpointProvider {
    #[must_use]
    pub fn new(
        client: Client,
        url: &str,
        username: String,
        password: String,
        token_field: Option<String>,
    ) -> Self {
        Self {
            client,
            url: url.to_owned(),
            username,
            password,
            token_field,
        }
    }

    fn extract<'body>(&self, body: &'body Value) -> Result<&'body str, AuthError> {
        if let Some(field) = self.token_field.as_deref() {
            return lookup(body, field).ok_or_else(|| AuthError::TokenFieldMissing {
                field: field.to_owned(),
            });
        }
        lookup(body, DEFAULT_TOKEN_FIELD)
            .or_else(|| lookup(body, FALLBACK_TOKEN_FIELD))
            .ok_or_else(|| AuthError::TokenFieldMissing {
                field: DEFAULT_TOKEN_FIELD.to_owned(),
            })
    }
}

#[async_trait]
impl CredentialProvider for TokenEndpointProvider {
    async fn fetch(&self) -> AppResult<Credential> {
        let payload = serde_json::json!({
            "username": self.username,
            "password": self.password,
        });
        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                AppError::auth(AuthError::TokenRequestFailed {
                    url: self.url.clone(),
                    source: err,
                })
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::auth(AuthError::TokenRejected {
                url: self.url.clone(),
                status: status.as_u16(),
            }));
        }

        let body: Value = response.json().await.map_err(|err| {
            AppError::auth(AuthError::InvalidTokenResponse {
                url: self.url.clone(),
                source: err,
            })
        })?;
        let token = self.extract(&body)?;
        Ok(Credential::new(token)?)
    }
}

fn lookup<'body>(body: &'body Value, path: &str) -> Option<&'body str> {
    path.split('.')
        .try_fold(body, |value, key| value.get(key))
        .and_then(Value::as_str)
}
