//! PKCE (Proof Key for Code Exchange) verification.
//!
//! Implements S256 code challenge verification per RFC 7636. The `plain`
//! method is not supported.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// The only supported `code_challenge_method`.
pub const S256_METHOD: &str = "S256";

/// Minimum code verifier length (RFC 7636 §4.1).
pub const MIN_VERIFIER_LENGTH: usize = 43;

/// Maximum code verifier length (RFC 7636 §4.1).
pub const MAX_VERIFIER_LENGTH: usize = 128;

/// Length of an unpadded base64url SHA-256 digest.
pub const CHALLENGE_LENGTH: usize = 43;

/// Random bytes behind a generated verifier.
const VERIFIER_ENTROPY_BYTES: usize = 32;

/// Check the code verifier format: 43..=128 unreserved characters.
#[must_use]
pub fn is_valid_code_verifier(verifier: &str) -> bool {
    (MIN_VERIFIER_LENGTH..=MAX_VERIFIER_LENGTH).contains(&verifier.len())
        && verifier
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~'))
}

/// Check the code challenge format: exactly 43 base64url characters, no padding.
#[must_use]
pub fn is_valid_code_challenge(challenge: &str) -> bool {
    challenge.len() == CHALLENGE_LENGTH
        && challenge.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'))
}

/// Verify a PKCE S256 code challenge.
///
/// Computes `BASE64URL(SHA256(code_verifier))` and compares to the stored challenge.
pub fn verify_s256(code_verifier: &str, code_challenge: &str) -> bool {
    generate_code_challenge(code_verifier) == code_challenge
}

/// Full PKCE check for a token exchange.
///
/// Fails unless `method` is `S256` and the verifier is well-formed and hashes
/// to `code_challenge`.
#[must_use]
pub fn validate_pkce(code_verifier: &str, code_challenge: &str, method: &str) -> bool {
    if method != S256_METHOD {
        tracing::debug!(method, "PKCE rejected: unsupported code_challenge_method");
        return false;
    }

    if !is_valid_code_verifier(code_verifier) {
        tracing::debug!(len = code_verifier.len(), "PKCE rejected: malformed code_verifier");
        return false;
    }

    let matched = verify_s256(code_verifier, code_challenge);
    if !matched {
        tracing::debug!("PKCE rejected: code_verifier does not match code_challenge");
    }
    matched
}

/// Generate a fresh code verifier from 32 random bytes (43 characters).
#[must_use]
pub fn generate_code_verifier() -> String {
    let mut bytes = [0u8; VERIFIER_ENTROPY_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Derive the S256 code challenge for a verifier.
#[must_use]
pub fn generate_code_challenge(code_verifier: &str) -> String {
    let hash = Sha256::digest(code_verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}
