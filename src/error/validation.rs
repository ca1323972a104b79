use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid number: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Invalid HTTP method '{value}'. Use GET, POST, PUT, PATCH, DELETE or HEAD.")]
    InvalidHttpMethod { value: String },
    #[error("Endpoint list was empty.")]
    EmptyEndpointList,
    #[error("Endpoint #{index} has an empty name.")]
    EmptyEndpointName { index: usize },
    #[error("Endpoint '{name}' has an invalid URL '{url}': {source}")]
    InvalidEndpointUrl {
        name: String,
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Endpoint '{name}' uses unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedUrlScheme { name: String, scheme: String },
    #[error("Endpoint '{endpoint}' references unknown body builder '{builder}'.")]
    UnknownBodyBuilder { endpoint: String, builder: String },
    #[error("Body builder name must not be empty.")]
    EmptyBodyBuilderName,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
