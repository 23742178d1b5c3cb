//! Request validators for the authorization, token and registration endpoints.
//!
//! Every validator is total: it never panics on malformed input, and returns
//! the first failing check as a [`ValidationError`]. Fields with the wrong JSON
//! type are treated as missing.

mod authorization;
mod registration;
mod token;

pub use authorization::validate_authorization_request;
pub use registration::validate_client_registration_request;
pub use token::validate_token_request;

use serde::Serialize;
use serde_json::{Value, json};

use crate::config::ValidatorConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::models::{
    AuthorizationRequest, ClientRegistrationRequest, RawRequestFields, TokenRequest,
};
use crate::scope::validate_scope;
use crate::uri::{is_valid_redirect_uri, is_valid_resource_uri};

/// Get a field only if it is a JSON string.
fn string_field<'a>(fields: &'a RawRequestFields, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}

/// Get a field that must be a non-empty string.
fn required_string<'a>(fields: &'a RawRequestFields, name: &str) -> ValidationResult<&'a str> {
    match string_field(fields, name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::invalid_request(format!("{name} is required"))),
    }
}

/// Copy an optional string field through, dropping non-string values.
fn optional_string(fields: &RawRequestFields, name: &str) -> Option<String> {
    string_field(fields, name).map(str::to_string)
}

/// Render a validation outcome as `{"valid": ..., "data" | "error" ...}`.
pub fn report<T: Serialize>(result: &ValidationResult<T>) -> Value {
    match result {
        Ok(data) => json!({ "valid": true, "data": data }),
        Err(err) => json!({
            "valid": false,
            "error": err.kind,
            "error_description": err.description,
        }),
    }
}

/// Validators bound to one configuration.
///
/// Share it behind an `Arc` in server state.
#[derive(Debug, Clone, Default)]
pub struct OAuthValidator {
    config: ValidatorConfig,
}

impl OAuthValidator {
    #[must_use]
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn authorization_request(
        &self,
        params: &RawRequestFields,
    ) -> ValidationResult<AuthorizationRequest> {
        validate_authorization_request(params, &self.config)
    }

    pub fn token_request(&self, params: &RawRequestFields) -> ValidationResult<TokenRequest> {
        validate_token_request(params)
    }

    pub fn client_registration_request(
        &self,
        body: &RawRequestFields,
    ) -> ValidationResult<ClientRegistrationRequest> {
        validate_client_registration_request(body, &self.config)
    }

    #[must_use]
    pub fn is_valid_redirect_uri(&self, uri: &str) -> bool {
        is_valid_redirect_uri(uri, &self.config)
    }

    #[must_use]
    pub fn is_valid_resource_uri(&self, uri: &str) -> bool {
        is_valid_resource_uri(uri)
    }

    #[must_use]
    pub fn scope(&self, scope: Option<&str>) -> String {
        validate_scope(scope, &self.config)
    }
}
