//! Enumeration types for OAuth protocol parameters.

use serde::{Deserialize, Serialize};

use crate::pkce::S256_METHOD;

/// Authorization `response_type`. Only the code flow is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Authorization code flow.
    #[default]
    Code,
}

impl ResponseType {
    /// All supported response types.
    pub const ALL: &'static [Self] = &[Self::Code];

    /// Parse a wire value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "code" => Some(Self::Code),
            _ => None,
        }
    }

    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
        }
    }
}

/// PKCE `code_challenge_method`. `plain` is deliberately absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeChallengeMethod {
    /// SHA-256, base64url without padding.
    #[default]
    S256,
}

impl CodeChallengeMethod {
    /// All supported methods.
    pub const ALL: &'static [Self] = &[Self::S256];

    /// Parse a wire value. Case-sensitive.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        (value == S256_METHOD).then_some(Self::S256)
    }

    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S256 => S256_METHOD,
        }
    }
}

/// Token endpoint `grant_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Exchange an authorization code (RFC 6749 §4.1.3).
    AuthorizationCode,
    /// Refresh an access token (RFC 6749 §6).
    RefreshToken,
}

impl GrantType {
    /// All supported grant types.
    pub const ALL: &'static [Self] = &[Self::AuthorizationCode, Self::RefreshToken];

    /// Parse a wire value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "authorization_code" => Some(Self::AuthorizationCode),
            "refresh_token" => Some(Self::RefreshToken),
            _ => None,
        }
    }

    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::RefreshToken => "refresh_token",
        }
    }
}

/// Client authentication method at the token endpoint (RFC 7591 §2).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenEndpointAuthMethod {
    /// Public client, no secret.
    #[default]
    None,
    /// Secret sent in the request body.
    ClientSecretPost,
    /// Secret sent with HTTP Basic authentication.
    ClientSecretBasic,
}

impl TokenEndpointAuthMethod {
    /// All supported methods.
    pub const ALL: &'static [Self] =
        &[Self::None, Self::ClientSecretPost, Self::ClientSecretBasic];

    /// Parse a wire value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "client_secret_post" => Some(Self::ClientSecretPost),
            "client_secret_basic" => Some(Self::ClientSecretBasic),
            _ => None,
        }
    }

    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ClientSecretPost => "client_secret_post",
            Self::ClientSecretBasic => "client_secret_basic",
        }
    }

    /// Check if the client must present a secret.
    #[must_use]
    pub const fn requires_secret(self) -> bool {
        !matches!(self, Self::None)
    }
}
