//! Query execution endpoint.

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::url_encoding::{encode_model_path, encode_path_segment};
use crate::endpoints::{apply_auth, parse_json, send_request};
use crate::error::Result;
use crate::models::{QueryParams, QueryResult};

/// Execute a query against a model and return its results.
///
/// Parameters are validated before any network call: `query` and `query_name`
/// are mutually exclusive, and `query_name` requires `source_name`.
pub async fn run_query(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    params: &QueryParams,
) -> Result<QueryResult> {
    params.validate()?;

    let url = format!(
        "{}/api/v0/projects/{}/packages/{}/queryResults/{}",
        base_url,
        encode_path_segment(&params.project_name),
        encode_path_segment(&params.package_name),
        encode_model_path(&params.path)
    );
    debug!(%url, "running query");

    let mut query_params: Vec<(&str, &str)> = Vec::new();
    if let Some(version) = params.version_id.as_deref() {
        query_params.push(("versionId", version));
    }
    if let Some(query) = params.query.as_deref() {
        query_params.push(("query", query));
    }
    if let Some(source) = params.source_name.as_deref() {
        query_params.push(("sourceName", source));
    }
    if let Some(name) = params.query_name.as_deref() {
        query_params.push(("queryName", name));
    }

    let builder = apply_auth(client.get(&url).query(&query_params), auth);
    let response = send_request(builder, &url).await?;
    parse_json(response).await
}
