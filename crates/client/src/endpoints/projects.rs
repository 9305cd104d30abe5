//! Project endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::endpoints::{apply_auth, parse_json, send_request};
use crate::error::Result;
use crate::models::{About, Project};

/// List the projects hosted on this server.
pub async fn list_projects(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
) -> Result<Vec<Project>> {
    let url = format!("{}/api/v0/projects", base_url);
    debug!(%url, "listing projects");

    let builder = apply_auth(client.get(&url), auth);
    let response = send_request(builder, &url).await?;
    parse_json(response).await
}

/// Get metadata about a project.
pub async fn get_about(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    project_name: &str,
) -> Result<About> {
    let url = format!(
        "{}/api/v0/projects/{}/about",
        base_url,
        encode_path_segment(project_name)
    );
    debug!(%url, "fetching project about");

    let builder = apply_auth(client.get(&url), auth);
    let response = send_request(builder, &url).await?;
    parse_json(response).await
}
