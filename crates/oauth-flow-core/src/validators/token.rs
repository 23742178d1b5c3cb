//! Token endpoint request validation.

use super::{optional_string, required_string, string_field};
use crate::error::{ValidationError, ValidationResult};
use crate::models::{GrantType, RawRequestFields, TokenGrant, TokenRequest};

/// Validate token endpoint parameters.
///
/// Only confirms that the grant's fields are present. PKCE verification and
/// matching `redirect_uri`/`resource` against the stored authorization belong
/// to the token exchange, which has the stored challenge.
pub fn validate_token_request(params: &RawRequestFields) -> ValidationResult<TokenRequest> {
    check(params)
        .inspect(|request| {
            tracing::trace!(
                client_id = %request.client_id,
                grant_type = request.grant_type().as_str(),
                "Token request accepted"
            );
        })
        .inspect_err(|err| {
            tracing::debug!(
                error = %err.kind,
                description = %err.description,
                "Token request rejected"
            );
        })
}

fn check(params: &RawRequestFields) -> ValidationResult<TokenRequest> {
    let grant_type = string_field(params, "grant_type").and_then(GrantType::parse).ok_or_else(|| {
        ValidationError::unsupported_grant_type(
            "grant_type must be \"authorization_code\" or \"refresh_token\"",
        )
    })?;

    let client_id = required_string(params, "client_id")?;

    let grant = match grant_type {
        GrantType::AuthorizationCode => TokenGrant::AuthorizationCode {
            code: required_string(params, "code")?.to_string(),
            redirect_uri: required_string(params, "redirect_uri")?.to_string(),
            code_verifier: required_string(params, "code_verifier")?.to_string(),
        },
        GrantType::RefreshToken => TokenGrant::RefreshToken {
            refresh_token: required_string(params, "refresh_token")?.to_string(),
        },
    };

    Ok(TokenRequest {
        grant,
        client_id: client_id.to_string(),
        client_secret: optional_string(params, "client_secret"),
        resource: optional_string(params, "resource"),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::error::OAuthErrorKind;
    use crate::models::raw_fields_from_json;

    fn validate(value: &Value) -> ValidationResult<TokenRequest> {
        validate_token_request(&raw_fields_from_json(value))
    }

    #[test]
    fn test_authorization_code_grant() {
        let request = validate(&json!({
            "grant_type": "authorization_code",
            "client_id": "abc",
            "code": "code-1",
            "redirect_uri": "https://app.example.com/cb",
            "code_verifier": "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk",
        }))
        .unwrap();

        assert_eq!(request.grant_type(), GrantType::AuthorizationCode);
        assert_eq!(
            request.grant,
            TokenGrant::AuthorizationCode {
                code: "code-1".into(),
                redirect_uri: "https://app.example.com/cb".into(),
                code_verifier: "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk".into(),
            }
        );
        assert_eq!(request.client_secret, None);
        assert_eq!(request.resource, None);
    }

    #[test]
    fn test_refresh_token_grant() {
        let request = validate(&json!({
            "grant_type": "refresh_token",
            "client_id": "abc",
            "refresh_token": "rt-1",
            "client_secret": "s3cret",
            "resource": "https://api.example.com",
        }))
        .unwrap();

        assert_eq!(
            request.grant,
            TokenGrant::RefreshToken {
                refresh_token: "rt-1".into()
            }
        );
        assert_eq!(request.client_secret.as_deref(), Some("s3cret"));
        assert_eq!(request.resource.as_deref(), Some("https://api.example.com"));
    }

    #[test]
    fn test_unsupported_grant_types() {
        for body in [
            json!({"grant_type": "client_credentials"}),
            json!({"grant_type": "password", "client_id": "abc"}),
            json!({"grant_type": 7}),
            json!({}),
        ] {
            let err = validate(&body).unwrap_err();
            assert_eq!(err.kind, OAuthErrorKind::UnsupportedGrantType, "{body}");
        }
    }

    #[test]
    fn test_client_id_checked_before_grant_fields() {
        let err = validate(&json!({"grant_type": "authorization_code"})).unwrap_err();
        assert_eq!(err.kind, OAuthErrorKind::InvalidRequest);
        assert_eq!(err.description, "client_id is required");
    }

    #[test]
    fn test_authorization_code_field_order() {
        let err = validate(&json!({"grant_type": "authorization_code", "client_id": "abc"}))
            .unwrap_err();
        assert_eq!(err.description, "code is required");

        let err = validate(&json!({
            "grant_type": "authorization_code",
            "client_id": "abc",
            "code": "c",
        }))
        .unwrap_err();
        assert_eq!(err.description, "redirect_uri is required");

        let err = validate(&json!({
            "grant_type": "authorization_code",
            "client_id": "abc",
            "code": "c",
            "redirect_uri": "https://app.example.com/cb",
        }))
        .unwrap_err();
        assert_eq!(err.description, "code_verifier is required");
    }

    #[test]
    fn test_refresh_token_required() {
        let err =
            validate(&json!({"grant_type": "refresh_token", "client_id": "abc"})).unwrap_err();
        assert_eq!(err.kind, OAuthErrorKind::InvalidRequest);
        assert_eq!(err.description, "refresh_token is required");
    }

    #[test]
    fn test_secrets_not_echoed() {
        let err = validate(&json!({
            "grant_type": "refresh_token",
            "client_id": "",
            "refresh_token": "very-secret-refresh",
            "client_secret": "very-secret-client",
        }))
        .unwrap_err();
        assert!(!err.description.contains("very-secret"));
    }
}
