//! Package models.

use serde::{Deserialize, Serialize};

/// A Malloy package hosted within a project.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_package() {
        let json = r#"{"name": "faa", "description": "FAA flight data"}"#;
        let package: Package = serde_json::from_str(json).unwrap();
        assert_eq!(package.name, "faa");
        assert_eq!(package.description, "FAA flight data");
    }

    #[test]
    fn test_package_missing_description_fails() {
        let err = serde_json::from_str::<Package>(r#"{"name": "faa"}"#).unwrap_err();
        assert!(err.to_string().contains("description"));
    }
}
