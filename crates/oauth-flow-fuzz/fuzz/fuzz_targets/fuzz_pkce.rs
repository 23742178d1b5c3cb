#![no_main]

use libfuzzer_sys::fuzz_target;
use oauth_flow_core::pkce::{S256_METHOD, generate_code_challenge, validate_pkce};

fuzz_target!(|data: &[u8]| {
    let verifier = String::from_utf8_lossy(data);
    let challenge = generate_code_challenge(&verifier);

    // Only well-formed verifiers may verify, even against their own challenge
    let valid = validate_pkce(&verifier, &challenge, S256_METHOD);
    assert_eq!(valid, oauth_flow_core::is_valid_code_verifier(&verifier));
});
