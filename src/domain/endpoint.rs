use serde::Deserialize;
use url::Url;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
        }
    }

    #[must_use]
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Head => reqwest::Method::HEAD,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "HEAD" => Ok(HttpMethod::Head),
            _ => Err(ValidationError::InvalidHttpMethod {
                value: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A named request target. Built once before the run and shared read-only by
/// every worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub name: String,
    pub method: HttpMethod,
    pub url: Url,
    /// Registered body builder used for POST requests.
    pub body_builder: Option<String>,
}

impl EndpointConfig {
    /// Validates a raw endpoint entry.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is blank, the URL does not parse, or the
    /// URL is not an absolute http(s) URL.
    pub fn new(
        index: usize,
        name: &str,
        method: HttpMethod,
        url: &str,
        body_builder: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyEndpointName { index });
        }
        let parsed = Url::parse(url.trim()).map_err(|err| ValidationError::InvalidEndpointUrl {
            name: name.to_owned(),
            url: url.to_owned(),
            source: err,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ValidationError::UnsupportedUrlScheme {
                    name: name.to_owned(),
                    scheme: other.to_owned(),
                });
            }
        }
        let body_builder = match body_builder {
            Some(builder) if builder.trim().is_empty() => {
                return Err(ValidationError::EmptyBodyBuilderName);
            }
            Some(builder) => Some(builder.trim().to_owned()),
            None => None,
        };

        Ok(Self {
            name: name.to_owned(),
            method,
            url: parsed,
            body_builder,
        })
    }

    /// Name of the body builder to invoke, if this endpoint sends one.
    #[must_use]
    pub fn active_body_builder(&self) -> Option<&str> {
        match self.method {
            HttpMethod::Post => self.body_builder.as_deref(),
            HttpMethod::Get
            | HttpMethod::Put
            | HttpMethod::Patch
            | HttpMethod::Delete
            | HttpMethod::Head => None,
        }
    }
}
