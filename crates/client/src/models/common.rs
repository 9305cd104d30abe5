//! Common types shared across publisher API models.

use serde::{Deserialize, Serialize};

/// Error payload returned by the publisher on non-2xx responses.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}
