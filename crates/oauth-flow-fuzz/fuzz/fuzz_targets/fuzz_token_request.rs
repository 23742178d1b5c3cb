#![no_main]

use libfuzzer_sys::fuzz_target;
use oauth_flow_core::models::{raw_fields_from_json, raw_fields_from_query};
use oauth_flow_core::validators::validate_token_request;

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);
    let _ = validate_token_request(&raw_fields_from_query(&body));

    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = validate_token_request(&raw_fields_from_json(&json));
    }
});
