//! Shared send/parse helpers for HTTP requests.
//!
//! This module centralizes transport error mapping, non-2xx status handling,
//! and response body parsing. The client performs no retries; transient
//! failures are classified via [`ClientError::is_retryable`] and left to the
//! caller.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::error::{ClientError, Result};
use crate::models::ApiErrorBody;

/// Attach bearer credentials to a request, if the strategy carries any.
pub(crate) fn apply_auth(builder: RequestBuilder, auth: &AuthStrategy) -> RequestBuilder {
    match auth.bearer_token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Map a reqwest transport failure to the client error taxonomy.
fn map_transport_error(url: &str, e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout(url.to_string())
    } else if e.is_connect() {
        ClientError::ConnectionRefused(url.to_string())
    } else {
        ClientError::Http(e)
    }
}

/// Send a request, mapping any non-2xx response to [`ClientError::Api`].
///
/// Error bodies matching the publisher's `{code, message}` shape are parsed
/// for a cleaner message; anything else is carried raw.
pub(crate) async fn send_request(builder: RequestBuilder, url: &str) -> Result<Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| map_transport_error(url, e))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let status = status.as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "could not read error response body".to_string());

    let (code, message) = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => (Some(parsed.code), parsed.message),
        Err(_) => (None, body),
    };

    debug!(status, %url, "request failed");
    Err(ClientError::Api {
        status,
        url,
        message,
        code,
    })
}

/// Read the response body and parse it against `T`.
///
/// Parsing goes through `serde_json` directly rather than `Response::json` so
/// schema mismatches surface as [`ClientError::InvalidResponse`] with the
/// serde diagnostic (which names the offending field) and the request URL.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(|e| map_transport_error(&url, e))?;
    serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(format!("{}: {}", url, e)))
}
