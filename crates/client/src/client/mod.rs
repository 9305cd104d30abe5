//! Main Malloy Publisher API client and API methods.
//!
//! This module provides the primary [`MalloyClient`] for interacting with the
//! publisher REST API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `projects`: Project listing and metadata methods
//! - `packages`: Package methods
//! - `models`: Model methods
//! - `queries`: Query execution methods
//! - `databases`: Embedded database methods
//! - `schedules`: Schedule methods
//! - `connections`: Database connection methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retry policy (left to the caller; see [`crate::ClientError::is_retryable`])
//!
//! # Invariants
//! - Configuration is immutable after construction; every method takes
//!   `&self`, so one client may serve many concurrent tasks.

pub mod builder;

// API method submodules
mod connections;
mod databases;
mod models;
mod packages;
mod projects;
mod queries;
mod schedules;

use crate::auth::AuthStrategy;

/// Malloy Publisher REST API client.
///
/// # Creating a Client
///
/// Use [`MalloyClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use malloy_client::{AuthStrategy, MalloyClient};
/// use secrecy::SecretString;
///
/// let client = MalloyClient::builder()
///     .base_url("http://localhost:4000")
///     .auth_strategy(AuthStrategy::ApiToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// ```
///
/// # Cancellation
///
/// Every method is a plain future; dropping it aborts the in-flight request.
#[derive(Debug, Clone)]
pub struct MalloyClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
}

impl MalloyClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing a [`MalloyClient`].
    pub fn builder() -> builder::MalloyClientBuilder {
        builder::MalloyClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether this client sends credentials with requests.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }
}
