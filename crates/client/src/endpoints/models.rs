//! Model endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::url_encoding::{encode_model_path, encode_path_segment};
use crate::endpoints::{apply_auth, parse_json, send_request};
use crate::error::Result;
use crate::models::{CompiledModel, Model};

/// List the models in a package.
///
/// The list response does not echo the package name; it is attached here so
/// callers receive self-describing records.
pub async fn list_models(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    project_name: &str,
    package_name: &str,
    version_id: Option<&str>,
) -> Result<Vec<Model>> {
    let url = format!(
        "{}/api/v0/projects/{}/packages/{}/models",
        base_url,
        encode_path_segment(project_name),
        encode_path_segment(package_name)
    );
    debug!(%url, ?version_id, "listing models");

    let mut builder = apply_auth(client.get(&url), auth);
    if let Some(version) = version_id {
        builder = builder.query(&[("versionId", version)]);
    }
    let response = send_request(builder, &url).await?;

    let mut models: Vec<Model> = parse_json(response).await?;
    for model in &mut models {
        model.package_name = package_name.to_string();
    }
    Ok(models)
}

/// Get a compiled model by its path within a package.
pub async fn get_model(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    project_name: &str,
    package_name: &str,
    model_path: &str,
) -> Result<CompiledModel> {
    let url = format!(
        "{}/api/v0/projects/{}/packages/{}/models/{}",
        base_url,
        encode_path_segment(project_name),
        encode_path_segment(package_name),
        encode_model_path(model_path)
    );
    debug!(%url, "fetching model");

    let builder = apply_auth(client.get(&url), auth);
    let response = send_request(builder, &url).await?;

    let mut compiled: CompiledModel = parse_json(response).await?;
    compiled.package_name = package_name.to_string();
    Ok(compiled)
}
