//! Package API methods for [`MalloyClient`].

use crate::client::MalloyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Package;

impl MalloyClient {
    /// List the packages hosted within a project.
    pub async fn list_packages(&self, project_name: &str) -> Result<Vec<Package>> {
        endpoints::list_packages(&self.http, &self.base_url, &self.auth, project_name).await
    }

    /// Get a package's metadata, optionally at a specific version.
    pub async fn get_package(
        &self,
        project_name: &str,
        package_name: &str,
        version_id: Option<&str>,
    ) -> Result<Package> {
        endpoints::get_package(
            &self.http,
            &self.base_url,
            &self.auth,
            project_name,
            package_name,
            version_id,
        )
        .await
    }
}
