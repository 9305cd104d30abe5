//! Embedded database methods for [`MalloyClient`].

use crate::client::MalloyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Database;

impl MalloyClient {
    /// List the databases embedded in a package.
    pub async fn list_databases(
        &self,
        project_name: &str,
        package_name: &str,
        version_id: Option<&str>,
    ) -> Result<Vec<Database>> {
        endpoints::list_databases(
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
