//! Client builder for constructing [`MalloyClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`MalloyClient`] methods)
//! - Configuration loading from the environment (see `malloy-config`)
//!
//! # Invariants
//! - `base_url` is required and must parse as an http(s) URL
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::client::MalloyClient;
use crate::error::{ClientError, Result};
use malloy_config::Config;
use malloy_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};

/// Builder for creating a new [`MalloyClient`].
///
/// All configuration options have sensible defaults except `base_url`, which
/// is required. Auth defaults to [`AuthStrategy::Anonymous`] — the publisher's
/// default deployment is unauthenticated.
///
/// # Example
///
/// ```rust,ignore
/// use malloy_client::MalloyClient;
/// use std::time::Duration;
///
/// let client = MalloyClient::builder()
///     .base_url("http://localhost:4000")
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct MalloyClientBuilder {
    base_url: Option<String>,
    auth_strategy: AuthStrategy,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for MalloyClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: AuthStrategy::Anonymous,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl MalloyClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the publisher server.
    ///
    /// This should include the protocol and port, e.g., `http://localhost:4000`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the authentication strategy.
    ///
    /// See [`AuthStrategy`] for available options.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = strategy;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// Centralizes the conversion from config crate types to client types.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = AuthStrategy::from(&config.auth.strategy);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`MalloyClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or
    /// does not parse as an http(s) URL.
    /// Returns [`ClientError::Http`] if the HTTP client fails to build.
    pub fn build(self) -> Result<MalloyClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                base_url
            )));
        }

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if parsed.scheme() == "https" {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification.
                // It has no effect on HTTP connections since there is no TLS layer.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(MalloyClient {
            http,
            base_url,
            auth: self.auth_strategy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_from_config_anonymous() {
        let config = Config::with_base_url("http://publisher.example.com:4000".to_string());

        let client = MalloyClient::builder().from_config(&config).build();

        assert!(client.is_ok());
        let client = client.unwrap();
        assert_eq!(client.base_url(), "http://publisher.example.com:4000");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_from_config_with_api_token() {
        let config = Config::with_api_token(
            "https://publisher.example.com".to_string(),
            SecretString::new("test-token".to_string().into()),
        );

        let client = MalloyClient::builder().from_config(&config).build().unwrap();

        assert!(client.is_authenticated());
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_base_url("https://publisher.example.com".to_string());
        config.connection.skip_verify = true;
        config.connection.timeout = std::time::Duration::from_secs(120);

        let builder = MalloyClient::builder().from_config(&config);

        assert_eq!(
            builder.base_url,
            Some("https://publisher.example.com".to_string())
        );
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, std::time::Duration::from_secs(120));
    }

    #[test]
    fn test_build_rejects_non_http_scheme() {
        let client = MalloyClient::builder()
            .base_url("ftp://publisher.example.com")
            .build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_normalize_base_url_trailing_slash() {
        let input = "http://localhost:4000/".to_string();
        assert_eq!(
            MalloyClientBuilder::normalize_base_url(input),
            "http://localhost:4000"
        );
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        let input = "http://localhost:4000//".to_string();
        assert_eq!(
            MalloyClientBuilder::normalize_base_url(input),
            "http://localhost:4000"
        );
    }

    #[test]
    fn test_skip_verify_with_http_url() {
        // Should succeed but log a warning about ineffective skip_verify
        let client = MalloyClient::builder()
            .base_url("http://localhost:4000")
            .skip_verify(true)
            .build();

        assert!(client.is_ok());
    }
}
