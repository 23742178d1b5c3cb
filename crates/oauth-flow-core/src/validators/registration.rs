//! Dynamic client registration request validation (RFC 7591).

use serde_json::Value;

use super::{optional_string, string_field};
use crate::config::ValidatorConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::models::{
    ClientRegistrationRequest, GrantType, RawRequestFields, ResponseType, TokenEndpointAuthMethod,
};
use crate::uri::is_valid_redirect_uri;

/// Validate a client registration body.
///
/// `redirect_uris` is the only hard requirement. The metadata lists are
/// filtered to supported values; unknown entries are dropped, not rejected.
pub fn validate_client_registration_request(
    body: &RawRequestFields,
    config: &ValidatorConfig,
) -> ValidationResult<ClientRegistrationRequest> {
    check(body, config)
        .inspect(|request| {
            tracing::trace!(
                redirect_uris = request.redirect_uris.len(),
                "Client registration request accepted"
            );
        })
        .inspect_err(|err| {
            tracing::debug!(
                error = %err.kind,
                description = %err.description,
                "Client registration request rejected"
            );
        })
}

fn check(
    body: &RawRequestFields,
    config: &ValidatorConfig,
) -> ValidationResult<ClientRegistrationRequest> {
    let entries = match body.get("redirect_uris") {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => {
            return Err(ValidationError::invalid_request(
                "redirect_uris must be a non-empty array",
            ));
        }
    };

    let mut redirect_uris = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.as_str() {
            Some(uri) if is_valid_redirect_uri(uri, config) => redirect_uris.push(uri.to_string()),
            Some(uri) => {
                return Err(ValidationError::invalid_request(format!(
                    "Invalid redirect_uri: {uri}"
                )));
            }
            None => {
                return Err(ValidationError::invalid_request(format!(
                    "Invalid redirect_uri: {entry}"
                )));
            }
        }
    }

    Ok(ClientRegistrationRequest {
        redirect_uris,
        client_name: optional_string(body, "client_name"),
        token_endpoint_auth_method: string_field(body, "token_endpoint_auth_method")
            .and_then(TokenEndpointAuthMethod::parse),
        grant_types: filtered_list(body, "grant_types", GrantType::parse),
        response_types: filtered_list(body, "response_types", ResponseType::parse),
        scope: optional_string(body, "scope"),
    })
}

/// Keep the recognized string entries of an array field, in order.
///
/// `None` when the field is absent or not an array.
fn filtered_list<T>(
    body: &RawRequestFields,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<Vec<T>> {
    let entries = body.get(name)?.as_array()?;
    Some(entries.iter().filter_map(Value::as_str).filter_map(parse).collect())
}
