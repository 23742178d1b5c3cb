//! OAuth 2.1 Flow Validation Core
//!
//! Validates authorization, token and dynamic client registration requests
//! against the OAuth 2.1 profile (RFC 6749, RFC 7636, RFC 8707, RFC 7591), and
//! verifies PKCE proofs at token exchange.
//!
//! # Features
//!
//! - **Pure and synchronous**: no I/O, no shared mutable state
//! - **Total validators**: untrusted field maps in, `Result` out, never a panic
//! - **Configurable allowlists**: schemes, loopback hosts, first-party callbacks, scopes
//! - **S256 only**: PKCE is mandatory and `plain` is refused
//!
//! # Example
//!
//! ```no_run
//! use oauth_flow_core::{ValidatorConfig, models::raw_fields_from_query, validators};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ValidatorConfig::from_env()?;
//!     let params = raw_fields_from_query(
//!         "response_type=code&client_id=abc&redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb\
//!          &code_challenge=E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM\
//!          &code_challenge_method=S256&resource=https%3A%2F%2Fapi.example.com",
//!     );
//!
//!     match validators::validate_authorization_request(&params, &config) {
//!         Ok(request) => println!("granted scope: {}", request.granted_scope(&config)),
//!         Err(err) => println!("{}", serde_json::to_string(&err)?),
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod models;
pub mod pkce;
pub mod scope;
pub mod uri;
pub mod validators;

pub use config::ValidatorConfig;
pub use error::{OAuthErrorKind, ValidationError, ValidationResult};
pub use pkce::{
    generate_code_challenge, generate_code_verifier, is_valid_code_challenge,
    is_valid_code_verifier, validate_pkce,
};
pub use scope::validate_scope;
pub use uri::{is_valid_redirect_uri, is_valid_resource_uri};
pub use validators::{
    OAuthValidator, validate_authorization_request, validate_client_registration_request,
    validate_token_request,
};
