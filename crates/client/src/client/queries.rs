//! Query execution methods for [`MalloyClient`].

use crate::client::MalloyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{QueryParams, QueryResult};

impl MalloyClient {
    /// Execute a query against a model and return its results.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::InvalidParams`] before any network call
    /// if both `query` and `query_name` are set, or if `query_name` is set
    /// without `source_name`.
    pub async fn execute_query(&self, params: &QueryParams) -> Result<QueryResult> {
        endpoints::run_query(&self.http, &self.base_url, &self.auth, params).await
    }
}
