//! Builder-pattern configuration loader.
//!
//! Merges configuration layers in order of precedence:
//! programmatic setters < environment variables. `.env` loading is opt-in
//! via [`ConfigLoader::load_dotenv`].

use secrecy::SecretString;
use std::time::Duration;
use url::Url;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::MAX_TIMEOUT_SECS;
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

/// Layered configuration loader for the Malloy Publisher client.
///
/// # Example
///
/// ```rust,ignore
/// use malloy_config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .load_dotenv()
///     .with_env()?
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new loader with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the current directory, if present.
    ///
    /// Existing process environment variables always win over `.env` entries.
    /// Honors `DOTENV_DISABLED=1` to keep test environments hermetic.
    pub fn load_dotenv(self) -> Self {
        let disabled = std::env::var("DOTENV_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if disabled {
            tracing::debug!("dotenv loading disabled via DOTENV_DISABLED");
        } else if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("no .env file loaded: {}", e);
        }
        self
    }

    /// Overlay values from `MALLOY_*` environment variables.
    pub fn with_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the publisher base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API token.
    pub fn api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Set whether to skip TLS certificate verification.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(super) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(super) fn set_api_token(&mut self, token: Option<SecretString>) {
        self.api_token = token;
    }

    pub(super) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(super) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    /// Validate the accumulated values and build a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the base URL is set but is
    /// not a valid http(s) URL, and [`ConfigError::InvalidTimeout`] if the
    /// timeout is zero or exceeds the allowed maximum.
    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = ConnectionConfig::default();

        let base_url = match self.base_url {
            Some(url) => {
                let parsed = Url::parse(&url)
                    .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", url, e)))?;
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err(ConfigError::InvalidBaseUrl(format!(
                        "{}: scheme must be http or https",
                        url
                    )));
                }
                url
            }
            None => defaults.base_url,
        };

        let timeout = self.timeout.unwrap_or(defaults.timeout);
        if timeout.is_zero() || timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout(format!(
                "must be between 1 and {} seconds (got {})",
                MAX_TIMEOUT_SECS,
                timeout.as_secs()
            )));
        }

        let strategy = match self.api_token {
            Some(token) => AuthStrategy::ApiToken { token },
            None => AuthStrategy::Anonymous,
        };

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(defaults.skip_verify),
                timeout,
            },
            auth: AuthConfig { strategy },
        })
    }
}
