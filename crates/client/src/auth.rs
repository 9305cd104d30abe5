//! Authentication strategies for the publisher API.
//!
//! The publisher has no login endpoint or session lifecycle: credentials are
//! a static bearer token supplied at client construction, or nothing at all
//! for unauthenticated deployments.

use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with the Malloy Publisher.
#[derive(Debug, Clone, Default)]
pub enum AuthStrategy {
    /// No credentials attached to requests.
    #[default]
    Anonymous,
    /// Static bearer token attached to every request.
    ApiToken { token: SecretString },
}

impl AuthStrategy {
    /// The bearer token to send, if any.
    pub(crate) fn bearer_token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::ApiToken { token } => Some(token.expose_secret()),
        }
    }

    /// Whether this strategy carries credentials.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::ApiToken { .. })
    }
}

impl From<&malloy_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: &malloy_config::AuthStrategy) -> Self {
        match strategy {
            malloy_config::AuthStrategy::Anonymous => Self::Anonymous,
            malloy_config::AuthStrategy::ApiToken { token } => Self::ApiToken {
                token: token.clone(),
            },
        }
    }
}
