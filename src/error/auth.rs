use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No credential configured. Set --token, AUTHSTRESS_TOKEN, or an [auth] section.")]
    MissingCredential,
    #[error("Environment variable '{var}' is not set.")]
    MissingEnvToken { var: String },
    #[error("Credential was empty.")]
    EmptyToken,
    #[error("Credential contains characters not allowed in an HTTP header.")]
    InvalidTokenCharacters,
    #[error("Token request to '{url}' failed: {source}")]
    TokenRequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Token request to '{url}' was rejected with status {status}.")]
    TokenRejected { url: String, status: u16 },
    #[error("Token response from '{url}' was not valid JSON: {source}")]
    InvalidTokenResponse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Token response did not contain a string field '{field}'.")]
    TokenFieldMissing { field: String },
}
