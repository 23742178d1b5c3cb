//! Configuration for the OAuth validators.
//!
//! Every allowlist the validators consult lives in [`ValidatorConfig`], so the
//! same logic runs unchanged across test, staging and production deployments.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Default allowlists.
pub mod defaults {
    /// Redirect URI schemes accepted by default.
    pub const ALLOWED_SCHEMES: &[&str] = &["https", "http"];

    /// Hosts for which plain `http` redirect URIs are allowed (loopback exception).
    pub const LOCALHOST_HOSTS: &[&str] = &["localhost", "127.0.0.1", "[::1]"];

    /// Operator-controlled callback URLs that bypass redirect URI checks.
    pub const FIRST_PARTY_CALLBACKS: &[&str] = &[
        "https://claude.ai/api/mcp/auth_callback",
        "https://claude.com/api/mcp/auth_callback",
    ];

    /// Scopes the server knows how to grant.
    pub const SUPPORTED_SCOPES: &[&str] = &["read", "write"];

    /// Scope granted when none (or nothing supported) is requested.
    pub const DEFAULT_SCOPE: &str = "read";
}

/// Environment variable names read by [`ValidatorConfig::from_env`].
pub mod env {
    pub const ALLOWED_SCHEMES: &str = "OAUTH_ALLOWED_SCHEMES";
    pub const LOCALHOST_HOSTS: &str = "OAUTH_LOCALHOST_HOSTS";
    pub const FIRST_PARTY_CALLBACKS: &str = "OAUTH_FIRST_PARTY_CALLBACKS";
    pub const SUPPORTED_SCOPES: &str = "OAUTH_SUPPORTED_SCOPES";
    pub const DEFAULT_SCOPE: &str = "OAUTH_DEFAULT_SCOPE";
}

/// Validator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Schemes a redirect URI may use.
    pub allowed_schemes: Vec<String>,

    /// Hosts allowed for `http` redirect URIs.
    pub localhost_hosts: Vec<String>,

    /// Exact-match redirect URIs that are always accepted.
    pub first_party_callbacks: Vec<String>,

    /// Scopes kept by the scope normalizer.
    pub supported_scopes: Vec<String>,

    /// Fallback scope string.
    pub default_scope: String,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Split a comma separated list, dropping blank entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|v| !v.is_empty()).map(str::to_string).collect()
}

impl ValidatorConfig {
    /// Create a configuration with the default allowlists.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allowed_schemes: owned(defaults::ALLOWED_SCHEMES),
            localhost_hosts: owned(defaults::LOCALHOST_HOSTS),
            first_party_callbacks: owned(defaults::FIRST_PARTY_CALLBACKS),
            supported_scopes: owned(defaults::SUPPORTED_SCOPES),
            default_scope: defaults::DEFAULT_SCOPE.to_string(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the resulting configuration is inconsistent.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns error if the resulting configuration is inconsistent.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(raw) = lookup(env::ALLOWED_SCHEMES) {
            config.allowed_schemes = parse_list(&raw);
        }
        if let Some(raw) = lookup(env::LOCALHOST_HOSTS) {
            config.localhost_hosts = parse_list(&raw);
        }
        if let Some(raw) = lookup(env::FIRST_PARTY_CALLBACKS) {
            config.first_party_callbacks = parse_list(&raw);
        }
        if let Some(raw) = lookup(env::SUPPORTED_SCOPES) {
            config.supported_scopes = parse_list(&raw);
        }
        if let Some(raw) = lookup(env::DEFAULT_SCOPE) {
            config.default_scope = raw.trim().to_string();
        }

        config.lowercase_schemes_and_hosts();
        config.validate()?;

        tracing::debug!(
            allowed_schemes = ?config.allowed_schemes,
            localhost_hosts = ?config.localhost_hosts,
            first_party_callbacks = config.first_party_callbacks.len(),
            supported_scopes = ?config.supported_scopes,
            default_scope = %config.default_scope,
            "Loaded validator configuration"
        );

        Ok(config)
    }

    /// Load configuration from a JSON document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or is inconsistent.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.lowercase_schemes_and_hosts();
        config.validate()?;
        Ok(config)
    }

    /// `Url` reports schemes and hosts in lower case, so the allowlists must match.
    fn lowercase_schemes_and_hosts(&mut self) {
        for value in self.allowed_schemes.iter_mut().chain(self.localhost_hosts.iter_mut()) {
            value.make_ascii_lowercase();
        }
    }

    /// Check that the allowlists are usable.
    ///
    /// # Errors
    ///
    /// Returns error if no scheme is allowed, no scope is supported, or the
    /// default scope contains a token outside the supported set.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.allowed_schemes.is_empty() {
            anyhow::bail!("allowed_schemes must not be empty");
        }
        if self.supported_scopes.is_empty() {
            anyhow::bail!("supported_scopes must not be empty");
        }

        let mut tokens = self.default_scope.split(' ').filter(|t| !t.is_empty()).peekable();
        if tokens.peek().is_none() {
            anyhow::bail!("default_scope must not be empty");
        }
        if let Some(unsupported) = tokens.find(|t| !self.is_supported_scope(t)) {
            anyhow::bail!("default_scope token '{unsupported}' is not in supported_scopes");
        }
        Ok(())
    }

    /// Replace the first-party callback allowlist.
    #[must_use]
    pub fn with_first_party_callbacks<I, S>(mut self, callbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.first_party_callbacks = callbacks.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the supported scope set.
    #[must_use]
    pub fn with_supported_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the default scope.
    #[must_use]
    pub fn with_default_scope(mut self, scope: impl Into<String>) -> Self {
        self.default_scope = scope.into();
        self
    }

    /// Replace the allowed redirect URI schemes.
    #[must_use]
    pub fn with_allowed_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_schemes =
            schemes.into_iter().map(|s| s.into().to_ascii_lowercase()).collect();
        self
    }

    /// Replace the loopback host set.
    #[must_use]
    pub fn with_localhost_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.localhost_hosts = hosts.into_iter().map(|h| h.into().to_ascii_lowercase()).collect();
        self
    }

    #[must_use]
    pub fn is_first_party_callback(&self, uri: &str) -> bool {
        self.first_party_callbacks.iter().any(|c| c == uri)
    }

    #[must_use]
    pub fn is_allowed_scheme(&self, scheme: &str) -> bool {
        self.allowed_schemes.iter().any(|s| s == scheme)
    }

    #[must_use]
    pub fn is_localhost_host(&self, host: &str) -> bool {
        self.localhost_hosts.iter().any(|h| h == host)
    }

    #[must_use]
    pub fn is_supported_scope(&self, scope: &str) -> bool {
        self.supported_scopes.iter().any(|s| s == scope)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
