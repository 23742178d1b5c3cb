#![no_main]

use libfuzzer_sys::fuzz_target;
use oauth_flow_core::ValidatorConfig;
use oauth_flow_core::models::raw_fields_from_json;
use oauth_flow_core::validators::validate_client_registration_request;

fuzz_target!(|data: &[u8]| {
    // Registration bodies are always JSON
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let body = raw_fields_from_json(&json);
        let _ = validate_client_registration_request(&body, &ValidatorConfig::new());
    }
});
