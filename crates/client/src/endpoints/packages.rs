//! Package endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::endpoints::{apply_auth, parse_json, send_request};
use crate::error::Result;
use crate::models::Package;

/// List the packages hosted within a project.
pub async fn list_packages(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    project_name: &str,
) -> Result<Vec<Package>> {
    let url = format!(
        "{}/api/v0/projects/{}/packages",
        base_url,
        encode_path_segment(project_name)
    );
    debug!(%url, "listing packages");

    let builder = apply_auth(client.get(&url), auth);
    let response = send_request(builder, &url).await?;
    parse_json(response).await
}

/// Get a package's metadata, optionally at a specific version.
pub async fn get_package(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    project_name: &str,
    package_name: &str,
    version_id: Option<&str>,
) -> Result<Package> {
    let url = format!(
        "{}/api/v0/projects/{}/packages/{}",
        base_url,
        encode_path_segment(project_name),
        encode_path_segment(package_name)
    );
    debug!(%url, ?version_id, "fetching package");

    let mut builder = apply_auth(client.get(&url), auth);
    if let Some(version) = version_id {
        builder = builder.query(&[("versionId", version)]);
    }
    let response = send_request(builder, &url).await?;
    parse_json(response).await
}
