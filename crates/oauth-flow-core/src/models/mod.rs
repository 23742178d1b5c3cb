//! Data models for OAuth requests.
//!
//! Protocol enums serialize to their RFC wire values; validated request
//! structs serialize with snake_case field names matching the OAuth parameters.

mod enums;
mod requests;

pub use enums::{CodeChallengeMethod, GrantType, ResponseType, TokenEndpointAuthMethod};
pub use requests::{
    AuthorizationRequest, ClientRegistrationRequest, RawRequestFields, TokenGrant, TokenRequest,
    raw_fields_from_json, raw_fields_from_query,
};
