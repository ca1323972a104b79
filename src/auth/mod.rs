//! Bearer credential acquisition.
//!
//! The run fetches one credential up front through a [`CredentialProvider`]
//! and shares it read-only with every worker. It is never refreshed.
mod credential;
mod provider;
mod token_endpoint;

#[cfg(test)]
mod tests;

pub use credential::Credential;
pub use provider::{CredentialProvider, StaticTokenProvider, provider_from_config};
pub use token_endpoint::TokenEndpointProvider;
