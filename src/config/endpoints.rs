use tracing::warn;

use crate::body::BodyRegistry;
use crate::domain::EndpointConfig;
use crate::error::{AppError, AppResult, ValidationError};

use super::types::EndpointEntry;

/// Validates the configured endpoints against the body registry.
///
/// # Errors
///
/// Returns an error when the list is empty, an entry is malformed, or an
/// entry names a body builder that is not registered.
pub fn build_endpoints(
    entries: &[EndpointEntry],
    registry: &BodyRegistry,
) -> AppResult<Vec<EndpointConfig>> {
    if entries.is_empty() {
        return Err(AppError::validation(ValidationError::EmptyEndpointList));
    }

    let mut endpoints = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let endpoint = EndpointConfig::new(
            index,
            &entry.name,
            entry.method,
            &entry.url,
            entry.body_builder.clone(),
        )?;
        if let Some(builder) = endpoint.body_builder.as_deref() {
            if !registry.contains(builder) {
                return Err(AppError::validation(ValidationError::UnknownBodyBuilder {
                    endpoint: endpoint.name.clone(),
                    builder: builder.to_owned(),
                }));
            }
            if endpoint.active_body_builder().is_none() {
                warn!(
                    "Endpoint '{}' declares body builder '{}' but uses {}; the body is ignored.",
                    endpoint.name, builder, endpoint.method
                );
            }
        }
        endpoints.push(endpoint);
    }

    Ok(endpoints)
}
