//! Redirect URI and resource indicator validation.
//!
//! Redirect URIs receive the authorization code, so they get the strict
//! allowlist. Resource URIs (RFC 8707) only name an audience and just need to
//! be well-formed absolute URIs without a fragment.

use url::Url;

use crate::config::ValidatorConfig;

/// Check a redirect URI against the configured allowlists.
///
/// First-party callbacks match exactly and skip every other check. Otherwise
/// the URI must parse, use an allowed scheme, use a loopback host when the
/// scheme is `http`, and carry no fragment (not even an empty one).
#[must_use]
pub fn is_valid_redirect_uri(uri: &str, config: &ValidatorConfig) -> bool {
    if config.is_first_party_callback(uri) {
        return true;
    }

    let Ok(parsed) = Url::parse(uri) else {
        return false;
    };

    let scheme = parsed.scheme();
    if !config.is_allowed_scheme(scheme) {
        return false;
    }

    if scheme == "http" && !parsed.host_str().is_some_and(|host| config.is_localhost_host(host)) {
        return false;
    }

    parsed.fragment().is_none()
}

/// Check an RFC 8707 resource indicator.
///
/// Any scheme is accepted; the URI must be absolute and fragment-free.
/// `Url::parse` rejects relative references, so parsing enforces the scheme.
#[must_use]
pub fn is_valid_resource_uri(uri: &str) -> bool {
    Url::parse(uri).is_ok_and(|parsed| parsed.fragment().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ValidatorConfig {
        ValidatorConfig::new()
    }

    #[test]
    fn test_https_accepted() {
        assert!(is_valid_redirect_uri("https://example.com/cb", &config()));
        assert!(is_valid_redirect_uri("https://example.com:8443/cb?x=1", &config()));
    }

    #[test]
    fn test_loopback_exception() {
        let config = config();
        assert!(is_valid_redirect_uri("http://localhost:8080/cb", &config));
        assert!(is_valid_redirect_uri("http://127.0.0.1:33418/callback", &config));
        assert!(is_valid_redirect_uri("http://[::1]:9000/cb", &config));
        assert!(is_valid_redirect_uri("http://LOCALHOST/cb", &config));
        assert!(!is_valid_redirect_uri("http://example.com/cb", &config));
        assert!(!is_valid_redirect_uri("http://localhost.evil.com/cb", &config));
    }

    #[test]
    fn test_scheme_allowlist() {
        let config = config();
        assert!(!is_valid_redirect_uri("ftp://example.com/cb", &config));
        assert!(!is_valid_redirect_uri("javascript:alert(1)", &config));
        assert!(!is_valid_redirect_uri("myapp://callback", &config));

        let native = ValidatorConfig::new().with_allowed_schemes(["https", "http", "myapp"]);
        assert!(is_valid_redirect_uri("myapp://callback", &native));
    }

    #[test]
    fn test_fragment_rejected() {
        let config = config();
        assert!(!is_valid_redirect_uri("https://example.com/cb#frag", &config));
        assert!(!is_valid_redirect_uri("https://example.com/cb#", &config));
        assert!(!is_valid_redirect_uri("http://localhost/cb#frag", &config));
    }

    #[test]
    fn test_unparseable_rejected() {
        let config = config();
        assert!(!is_valid_redirect_uri("not-a-uri", &config));
        assert!(!is_valid_redirect_uri("", &config));
        assert!(!is_valid_redirect_uri("/relative/path", &config));
    }

    #[test]
    fn test_first_party_bypass() {
        let config = ValidatorConfig::new()
            .with_first_party_callbacks(["http://internal.corp/cb", "not a uri at all"]);

        assert!(is_valid_redirect_uri("http://internal.corp/cb", &config));
        assert!(is_valid_redirect_uri("not a uri at all", &config));
        // Exact match only
        assert!(!is_valid_redirect_uri("http://internal.corp/cb/", &config));
    }

    #[test]
    fn test_default_first_party_callbacks() {
        assert!(is_valid_redirect_uri("https://claude.ai/api/mcp/auth_callback", &config()));
    }

    #[test]
    fn test_resource_uri() {
        assert!(is_valid_resource_uri("https://api.example.com"));
        assert!(is_valid_resource_uri("http://example.com/mcp"));
        assert!(is_valid_resource_uri("urn:example:resource"));
        assert!(!is_valid_resource_uri("https://example.com/cb#frag"));
        assert!(!is_valid_resource_uri("api.example.com"));
        assert!(!is_valid_resource_uri(""));
        assert!(!is_valid_resource_uri("/api/mcp"));
        assert!(!is_valid_resource_uri("//api.example.com/mcp"));
    }
}
