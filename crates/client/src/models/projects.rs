//! Project models.

use serde::{Deserialize, Serialize};

/// A project hosted on the publisher server.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Project {
    pub name: String,
}

/// Metadata about a project, currently its rendered readme.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct About {
    pub readme: String,
}
