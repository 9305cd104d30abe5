//! Database connection endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::endpoints::{apply_auth, parse_json, send_request};
use crate::error::Result;
use crate::models::Connection;

/// List the database connections configured on a project.
pub async fn list_connections(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    project_name: &str,
) -> Result<Vec<Connection>> {
    let url = format!(
        "{}/api/v0/projects/{}/connections",
        base_url,
        encode_path_segment(project_name)
    );
    debug!(%url, "listing connections");

    let builder = apply_auth(client.get(&url), auth);
    let response = send_request(builder, &url).await?;
    parse_json(response).await
}

/// Get a database connection by name.
pub async fn get_connection(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    project_name: &str,
    connection_name: &str,
) -> Result<Connection> {
    let url = format!(
        "{}/api/v0/projects/{}/connections/{}",
        base_url,
        encode_path_segment(project_name),
        encode_path_segment(connection_name)
    );
    debug!(%url, "fetching connection");

    let builder = apply_auth(client.get(&url), auth);
    let response = send_request(builder, &url).await?;
    parse_json(response).await
}
