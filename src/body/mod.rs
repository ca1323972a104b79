//! Request body generation keyed by builder name.
//!
//! Endpoints reference builders by name; the registry is assembled once at
//! startup from the built-in builders plus `[bodies.<name>]` templates in the
//! config file, so unknown names are rejected before any request is sent.
mod builtins;
mod registry;
mod template;


pub use registry::{BodyBuilder, BodyRegistry};
