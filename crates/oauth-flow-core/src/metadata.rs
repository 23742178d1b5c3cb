//! Discovery documents derived from the validator configuration.
//!
//! - RFC 8414: OAuth Authorization Server Metadata
//! - RFC 9728: OAuth Protected Resource Metadata
//!
//! Built from the same [`ValidatorConfig`] the validators use, so what the
//! server advertises is exactly what it accepts.

use serde::Serialize;

use crate::config::ValidatorConfig;
use crate::models::{CodeChallengeMethod, GrantType, ResponseType, TokenEndpointAuthMethod};

/// `GET /.well-known/oauth-authorization-server` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationServerMetadata {
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub registration_endpoint: String,
    pub scopes_supported: Vec<String>,
    pub response_types_supported: Vec<ResponseType>,
    pub grant_types_supported: Vec<GrantType>,
    pub token_endpoint_auth_methods_supported: Vec<TokenEndpointAuthMethod>,
    pub code_challenge_methods_supported: Vec<CodeChallengeMethod>,
}

impl AuthorizationServerMetadata {
    /// Metadata for an issuer serving `/authorize`, `/token` and `/register`.
    #[must_use]
    pub fn new(issuer: &str, config: &ValidatorConfig) -> Self {
        let issuer = issuer.trim_end_matches('/');
        Self {
            issuer: issuer.to_string(),
            authorization_endpoint: format!("{issuer}/authorize"),
            token_endpoint: format!("{issuer}/token"),
            registration_endpoint: format!("{issuer}/register"),
            scopes_supported: config.supported_scopes.clone(),
            response_types_supported: ResponseType::ALL.to_vec(),
            grant_types_supported: GrantType::ALL.to_vec(),
            token_endpoint_auth_methods_supported: TokenEndpointAuthMethod::ALL.to_vec(),
            code_challenge_methods_supported: CodeChallengeMethod::ALL.to_vec(),
        }
    }
}

/// `GET /.well-known/oauth-protected-resource` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedResourceMetadata {
    pub resource: String,
    pub authorization_servers: Vec<String>,
    pub bearer_methods_supported: Vec<String>,
    pub scopes_supported: Vec<String>,
}

impl ProtectedResourceMetadata {
    /// Metadata telling clients which issuer protects `resource`.
    #[must_use]
    pub fn new(resource: &str, issuer: &str, config: &ValidatorConfig) -> Self {
        Self {
            resource: resource.to_string(),
            authorization_servers: vec![issuer.trim_end_matches('/').to_string()],
            bearer_methods_supported: vec!["header".to_string()],
            scopes_supported: config.supported_scopes.clone(),
        }
    }
}
