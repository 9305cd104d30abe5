//! Embedded database models.

use serde::{Deserialize, Serialize};

/// A database file embedded in a package.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Database {
    /// Path of the database relative to the package root.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
}
