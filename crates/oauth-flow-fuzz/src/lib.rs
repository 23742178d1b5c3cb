//! Fuzzing library for oauth-flow-core.
//!
//! The targets feed arbitrary bytes through the request parsers and
//! validators. Validators must stay total: any input yields a `Result`.
//!
//! # Usage
//!
//! ```bash
//! cd crates/oauth-flow-fuzz
//! cargo +nightly fuzz run fuzz_authorization_request -- -max_total_time=60
//! ```

pub use oauth_flow_core::{models, pkce, validators};
