use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::HttpMethod;

/// On-disk configuration. Every `[run]` field is optional and only fills in
/// values not given on the command line.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub run: RunConfig,
    pub auth: Option<AuthConfig>,
    #[serde(default)]
    pub endpoints: Vec<EndpointEntry>,
    #[serde(default)]
    pub bodies: BTreeMap<String, BodyTemplateConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RunConfig {
    pub concurrency: Option<usize>,
    pub requests: Option<u64>,
    pub delay_ms: Option<u64>,
    pub output: Option<String>,
    pub export_json: Option<String>,
    pub request_timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AuthConfig {
    pub token: Option<String>,
    pub token_env: Option<String>,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub token_field: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointEntry {
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    #[serde(default, alias = "bodyBuilder")]
    pub body_builder: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BodyTemplateConfig {
    pub template: String,
}
