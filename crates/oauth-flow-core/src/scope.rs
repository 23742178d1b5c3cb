//! Scope normalization.

use crate::config::ValidatorConfig;

/// Reduce a requested scope string to the supported subset.
///
/// Never fails: unsupported tokens are dropped and an empty result falls back
/// to the configured default scope. Kept tokens retain their requested order.
#[must_use]
pub fn validate_scope(scope: Option<&str>, config: &ValidatorConfig) -> String {
    let Some(scope) = scope else {
        return config.default_scope.clone();
    };

    let kept: Vec<&str> = scope
        .split(' ')
        .filter(|token| !token.is_empty() && config.is_supported_scope(token))
        .collect();

    if kept.is_empty() {
        tracing::trace!(requested = scope, "No supported scope requested, using default");
        return config.default_scope.clone();
    }

    kept.join(" ")
}
