//! Validated OAuth request models.
//!
//! These are only ever produced by the validators in [`crate::validators`];
//! holding one means every field already passed its checks.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{CodeChallengeMethod, GrantType, ResponseType, TokenEndpointAuthMethod};
use crate::config::ValidatorConfig;
use crate::scope::validate_scope;

/// Untyped, caller-supplied request fields.
pub type RawRequestFields = Map<String, Value>;

/// Parse an `application/x-www-form-urlencoded` string into request fields.
///
/// Accepts a query string with or without the leading `?`. When a key repeats,
/// the first value wins.
#[must_use]
pub fn raw_fields_from_query(query: &str) -> RawRequestFields {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut fields = RawRequestFields::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        fields.entry(key.into_owned()).or_insert_with(|| Value::String(value.into_owned()));
    }
    fields
}

/// Convert any JSON body into request fields.
///
/// Non-object bodies yield an empty map, so they fail validation as
/// "missing field" instead of erroring out.
#[must_use]
pub fn raw_fields_from_json(body: &Value) -> RawRequestFields {
    body.as_object().cloned().unwrap_or_default()
}

/// A validated authorization request (RFC 6749 §4.1.1 + RFC 7636 + RFC 8707).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationRequest {
    pub response_type: ResponseType,
    pub client_id: String,
    pub redirect_uri: String,
    pub code_challenge: String,
    pub code_challenge_method: CodeChallengeMethod,
    /// Audience the issued code is bound to.
    pub resource: String,
    /// Raw requested scope, as sent by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl AuthorizationRequest {
    /// Scope to grant for this request after normalization.
    #[must_use]
    pub fn granted_scope(&self, config: &ValidatorConfig) -> String {
        validate_scope(self.scope.as_deref(), config)
    }
}

/// Grant-specific token request fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "grant_type", rename_all = "snake_case")]
pub enum TokenGrant {
    AuthorizationCode {
        code: String,
        redirect_uri: String,
        /// Checked against the stored challenge by the token endpoint.
        code_verifier: String,
    },
    RefreshToken {
        refresh_token: String,
    },
}

impl TokenGrant {
    #[must_use]
    pub const fn grant_type(&self) -> GrantType {
        match self {
            Self::AuthorizationCode { .. } => GrantType::AuthorizationCode,
            Self::RefreshToken { .. } => GrantType::RefreshToken,
        }
    }
}

/// A validated token request (RFC 6749 §4.1.3 / §6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRequest {
    #[serde(flatten)]
    pub grant: TokenGrant,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

impl TokenRequest {
    #[must_use]
    pub const fn grant_type(&self) -> GrantType {
        self.grant.grant_type()
    }
}

/// A validated dynamic client registration request (RFC 7591).
///
/// The list fields are `None` when the client did not send them, and may be
/// empty when every value sent was unrecognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRegistrationRequest {
    pub redirect_uris: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint_auth_method: Option<TokenEndpointAuthMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_types: Option<Vec<GrantType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_types: Option<Vec<ResponseType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}
