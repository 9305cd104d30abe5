//! Model API methods for [`MalloyClient`].

use crate::client::MalloyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CompiledModel, Model};

impl MalloyClient {
    /// List the models in a package.
    pub async fn list_models(
        &self,
        project_name: &str,
        package_name: &str,
        version_id: Option<&str>,
    ) -> Result<Vec<Model>> {
        endpoints::list_models(
            &self.http,
            &self.base_url,
            &self.auth,
            project_name,
            package_name,
            version_id,
        )
        .await
    }

    /// Get a compiled model by its path within a package.
    pub async fn get_model(
        &self,
        project_name: &str,
        package_name: &str,
        model_path: &str,
    ) -> Result<CompiledModel> {
        endpoints::get_model(
            &self.http,
            &self.base_url,
            &self.auth,
            project_name,
            package_name,
            model_path,
        )
        .await
    }
}
