mod app;
mod auth;
mod config;
mod export;
mod http;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use auth::AuthError;
pub use config::ConfigError;
pub use export::ExportError;
pub use http::HttpError;
pub use validation::ValidationError;
