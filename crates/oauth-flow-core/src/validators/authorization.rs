//! Authorization endpoint request validation.
//!
//! OAuth 2.1 profile: code flow only, PKCE S256 mandatory, RFC 8707 resource
//! indicator mandatory.

use super::{optional_string, required_string, string_field};
use crate::config::ValidatorConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::models::{AuthorizationRequest, CodeChallengeMethod, RawRequestFields, ResponseType};
use crate::pkce::is_valid_code_challenge;
use crate::uri::{is_valid_redirect_uri, is_valid_resource_uri};

/// Validate authorization endpoint parameters.
///
/// Checks run in this order and the first failure is returned, always as
/// `invalid_request`: `response_type`, `client_id`, `redirect_uri`,
/// `code_challenge`, `code_challenge_method`, `resource`.
pub fn validate_authorization_request(
    params: &RawRequestFields,
    config: &ValidatorConfig,
) -> ValidationResult<AuthorizationRequest> {
    check(params, config)
        .inspect(|request| {
            tracing::trace!(client_id = %request.client_id, "Authorization request accepted");
        })
        .inspect_err(|err| {
            tracing::debug!(
                error = %err.kind,
                description = %err.description,
                "Authorization request rejected"
            );
        })
}

fn check(
    params: &RawRequestFields,
    config: &ValidatorConfig,
) -> ValidationResult<AuthorizationRequest> {
    let response_type = string_field(params, "response_type")
        .and_then(ResponseType::parse)
        .ok_or_else(|| ValidationError::invalid_request("response_type must be \"code\""))?;

    let client_id = required_string(params, "client_id")?;

    let redirect_uri = required_string(params, "redirect_uri")?;
    if !is_valid_redirect_uri(redirect_uri, config) {
        return Err(ValidationError::invalid_request(
            "redirect_uri must use an allowed scheme (http only on loopback hosts) and must not contain a fragment",
        ));
    }

    let code_challenge = required_string(params, "code_challenge")?;
    if !is_valid_code_challenge(code_challenge) {
        return Err(ValidationError::invalid_request(
            "code_challenge must be a 43-character base64url-encoded SHA-256 digest",
        ));
    }

    let code_challenge_method = string_field(params, "code_challenge_method")
        .and_then(CodeChallengeMethod::parse)
        .ok_or_else(|| ValidationError::invalid_request("code_challenge_method must be \"S256\""))?;

    let resource = required_string(params, "resource")?;
    if !is_valid_resource_uri(resource) {
        return Err(ValidationError::invalid_request(
            "resource must be an absolute URI without a fragment",
        ));
    }

    Ok(AuthorizationRequest {
        response_type,
        client_id: client_id.to_string(),
        redirect_uri: redirect_uri.to_string(),
        code_challenge: code_challenge.to_string(),
        code_challenge_method,
        resource: resource.to_string(),
        scope: optional_string(params, "scope"),
        state: optional_string(params, "state"),
    })
}
