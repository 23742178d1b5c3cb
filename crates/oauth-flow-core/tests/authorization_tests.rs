//! Integration tests for authorization request validation.

use serde_json::{Value, json};

use oauth_flow_core::models::{
    AuthorizationRequest, CodeChallengeMethod, ResponseType, raw_fields_from_json,
    raw_fields_from_query,
};
use oauth_flow_core::{
    OAuthErrorKind, ValidationResult, ValidatorConfig, generate_code_challenge,
    generate_code_verifier, validate_authorization_request,
};

const CHALLENGE: &str = "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM";

fn valid_params() -> Value {
    json!({
        "response_type": "code",
        "client_id": "abc",
        "redirect_uri": "https://app.example.com/cb",
        "code_challenge": CHALLENGE,
        "code_challenge_method": "S256",
        "resource": "https://api.example.com",
    })
}

fn with(field: &str, value: Value) -> Value {
    let mut params = valid_params();
    params[field] = value;
    params
}

fn without(fields: &[&str]) -> Value {
    let mut params = valid_params();
    for field in fields {
        params.as_object_mut().unwrap().remove(*field);
    }
    params
}

fn validate(params: &Value) -> ValidationResult<AuthorizationRequest> {
    validate_authorization_request(&raw_fields_from_json(params), &ValidatorConfig::new())
}

// ─── Success path ────────────────────────────────────────────────────────────

#[test]
fn test_end_to_end_valid_request() {
    let request = validate(&valid_params()).expect("request should be valid");

    assert_eq!(request.response_type, ResponseType::Code);
    assert_eq!(request.client_id, "abc");
    assert_eq!(request.redirect_uri, "https://app.example.com/cb");
    assert_eq!(request.code_challenge, CHALLENGE);
    assert_eq!(request.code_challenge_method, CodeChallengeMethod::S256);
    assert_eq!(request.code_challenge_method.as_str(), "S256");
    assert_eq!(request.resource, "https://api.example.com");

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["code_challenge_method"], "S256");
    assert_eq!(json["response_type"], "code");
    assert!(json.get("scope").is_none());
}

#[test]
fn test_valid_request_from_query_string() {
    let verifier = generate_code_verifier();
    let challenge = generate_code_challenge(&verifier);
    let query = format!(
        "response_type=code&client_id=cli&redirect_uri=http%3A%2F%2F127.0.0.1%3A33418%2Fcallback\
         &code_challenge={challenge}&code_challenge_method=S256\
         &resource=https%3A%2F%2Fapi.example.com%2Fmcp&state=xyz123&scope=read+bogus+write"
    );

    let config = ValidatorConfig::new();
    let request =
        validate_authorization_request(&raw_fields_from_query(&query), &config).unwrap();

    assert_eq!(request.redirect_uri, "http://127.0.0.1:33418/callback");
    assert_eq!(request.state.as_deref(), Some("xyz123"));
    assert_eq!(request.scope.as_deref(), Some("read bogus write"));
    assert_eq!(request.granted_scope(&config), "read write");
}

#[test]
fn test_first_party_callback_accepted() {
    let config =
        ValidatorConfig::new().with_first_party_callbacks(["http://dashboard.internal/cb"]);
    let params = with("redirect_uri", json!("http://dashboard.internal/cb"));

    assert!(validate_authorization_request(&raw_fields_from_json(&params), &config).is_ok());
    assert!(validate(&params).is_err());
}

// ─── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn test_first_failure_reports_client_id_before_redirect_uri() {
    let err = validate(&without(&["client_id", "redirect_uri"])).unwrap_err();

    assert_eq!(err.kind, OAuthErrorKind::InvalidRequest);
    assert!(err.description.contains("client_id"));
    assert!(!err.description.contains("redirect_uri"));
}

#[test]
fn test_first_failure_ordering_across_all_fields() {
    let ordered = [
        "response_type",
        "client_id",
        "redirect_uri",
        "code_challenge",
        "code_challenge_method",
        "resource",
    ];

    for (i, field) in ordered.iter().enumerate() {
        let err = validate(&without(&ordered[i..])).unwrap_err();
        assert!(err.description.starts_with(field), "expected {field}, got {}", err.description);
    }
}

// ─── Individual rules ────────────────────────────────────────────────────────

#[test]
fn test_response_type_must_be_code() {
    for value in [json!("token"), json!("code id_token"), json!("CODE"), json!(null)] {
        let err = validate(&with("response_type", value)).unwrap_err();
        assert!(err.description.contains("response_type"));
    }
}

#[test]
fn test_empty_client_id_rejected() {
    let err = validate(&with("client_id", json!(""))).unwrap_err();
    assert_eq!(err.description, "client_id is required");
}

#[test]
fn test_redirect_uri_rules() {
    for uri in ["http://example.com/cb", "https://example.com/cb#frag", "not-a-uri", "ftp://x/cb"] {
        let err = validate(&with("redirect_uri", json!(uri))).unwrap_err();
        assert!(err.description.starts_with("redirect_uri"), "{uri}");
    }
    assert!(validate(&with("redirect_uri", json!("http://localhost:8080/cb"))).is_ok());
}

#[test]
fn test_code_challenge_format() {
    let too_long = format!("{CHALLENGE}A");
    for challenge in [&CHALLENGE[..42], too_long.as_str(), "a+b/c=", ""] {
        let err = validate(&with("code_challenge", json!(challenge))).unwrap_err();
        assert!(err.description.starts_with("code_challenge"), "{challenge}");
    }
}

#[test]
fn test_plain_method_rejected() {
    for method in ["plain", "s256", "SHA256"] {
        let err = validate(&with("code_challenge_method", json!(method))).unwrap_err();
        assert_eq!(err.description, "code_challenge_method must be \"S256\"");
    }
}

#[test]
fn test_resource_rules() {
    let err = validate(&with("resource", json!("https://api.example.com#x"))).unwrap_err();
    assert!(err.description.starts_with("resource"));

    let err = validate(&with("resource", json!("api.example.com"))).unwrap_err();
    assert!(err.description.starts_with("resource"));

    assert!(validate(&with("resource", json!("urn:example:api"))).is_ok());
}

#[test]
fn test_non_object_input_is_rejected_not_panicking() {
    for body in [json!(null), json!([1, 2, 3]), json!("response_type=code"), json!(12)] {
        let err = validate(&body).unwrap_err();
        assert_eq!(err.kind, OAuthErrorKind::InvalidRequest);
    }
}
