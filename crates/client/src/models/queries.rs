//! Query request and result types.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Parameters for executing a query against a model.
///
/// Either an ad-hoc `query` string or a named query (`source_name` +
/// `query_name`) may be supplied, not both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    /// Name of the project.
    pub project_name: String,
    /// Name of the package.
    pub package_name: String,
    /// Path to the model within the package.
    pub path: String,
    /// Ad-hoc query string to execute on the model.
    pub query: Option<String>,
    /// Name of the source in the model.
    pub source_name: Option<String>,
    /// Name of a query to execute on a source.
    pub query_name: Option<String>,
    /// Package version to query against.
    pub version_id: Option<String>,
}

impl QueryParams {
    /// Validate the parameter combination before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidParams`] if both `query` and `query_name`
    /// are set, or if `query_name` is set without `source_name`.
    pub fn validate(&self) -> Result<()> {
        if self.query.is_some() && self.query_name.is_some() {
            return Err(ClientError::InvalidParams(
                "cannot specify both query and query_name".to_string(),
            ));
        }
        if self.query_name.is_some() && self.source_name.is_none() {
            return Err(ClientError::InvalidParams(
                "source_name is required when query_name is specified".to_string(),
            ));
        }
        Ok(())
    }
}

/// A query's results, its model def, and its data styles.
///
/// All three fields are opaque JSON strings produced by the Malloy compiler;
/// callers render or parse them downstream.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QueryResult {
    /// Data style for rendering query results.
    #[serde(rename = "dataStyles")]
    pub data_styles: String,
    /// Malloy model definition.
    #[serde(rename = "modelDef")]
    pub model_def: String,
    /// Malloy query results.
    #[serde(rename = "queryResult")]
    pub query_result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> QueryParams {
        QueryParams {
            project_name: "home".to_string(),
            package_name: "faa".to_string(),
            path: "flights.malloy".to_string(),
            ..QueryParams::default()
        }
    }

    #[test]
    fn test_validate_plain_query() {
        let params = QueryParams {
            query: Some("run: flights -> { aggregate: flight_count }".to_string()),
            ..base_params()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_named_query() {
        let params = QueryParams {
            source_name: Some("flights".to_string()),
            query_name: Some("top_carriers".to_string()),
            ..base_params()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_query_and_query_name() {
        let params = QueryParams {
            query: Some("run: flights -> {}".to_string()),
            query_name: Some("top_carriers".to_string()),
            ..base_params()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, ClientError::InvalidParams(_)));
    }

    #[test]
    fn test_validate_rejects_query_name_without_source() {
        let params = QueryParams {
            query_name: Some("top_carriers".to_string()),
            ..base_params()
        };
        let err = params.validate().unwrap_err();
        assert!(
            matches!(err, ClientError::InvalidParams(ref m) if m.contains("source_name"))
        );
    }

    #[test]
    fn test_query_result_wire_names() {
        let json = r#"{
            "dataStyles": "{}",
            "modelDef": "{\"name\":\"flights\"}",
            "queryResult": "[{\"carrier\":\"WN\"}]"
        }"#;
        let result: QueryResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.data_styles, "{}");
        assert!(result.query_result.contains("WN"));
    }
}
