//! Configuration loading and application.
mod apply;
mod endpoints;
mod loader;
pub mod types;


pub use apply::apply_config;
pub use endpoints::build_endpoints;
pub use loader::load_config;

#[cfg(test)]
pub(crate) use loader::load_config_file;
