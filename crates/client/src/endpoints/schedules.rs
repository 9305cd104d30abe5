//! Schedule endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::endpoints::{apply_auth, parse_json, send_request};
use crate::error::Result;
use crate::models::Schedule;

/// List the schedules running against a package.
pub async fn list_schedules(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    project_name: &str,
    package_name: &str,
    version_id: Option<&str>,
) -> Result<Vec<Schedule>> {
    let url = format!(
        "{}/api/v0/projects/{}/packages/{}/schedules",
        base_url,
        encode_path_segment(project_name),
        encode_path_segment(package_name)
    );
    debug!(%url, ?version_id, "listing schedules");

    let mut builder = apply_auth(client.get(&url), auth);
    if let Some(version) = version_id {
        builder = builder.query(&[("versionId", version)]);
    }
    let response = send_request(builder, &url).await?;
    parse_json(response).await
}
