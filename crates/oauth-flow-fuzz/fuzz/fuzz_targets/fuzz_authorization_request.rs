#![no_main]

use libfuzzer_sys::fuzz_target;
use oauth_flow_core::ValidatorConfig;
use oauth_flow_core::models::{raw_fields_from_json, raw_fields_from_query};
use oauth_flow_core::validators::validate_authorization_request;

fuzz_target!(|data: &[u8]| {
    let config = ValidatorConfig::new();

    // Query strings are parsed lossily, so any bytes work
    let query = String::from_utf8_lossy(data);
    let _ = validate_authorization_request(&raw_fields_from_query(&query), &config);

    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = validate_authorization_request(&raw_fields_from_json(&json), &config);
    }
});
