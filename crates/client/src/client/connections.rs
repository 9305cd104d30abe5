//! Database connection methods for [`MalloyClient`].

use crate::client::MalloyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Connection;

impl MalloyClient {
    /// List the database connections configured on a project.
    pub async fn list_connections(&self, project_name: &str) -> Result<Vec<Connection>> {
        endpoints::list_connections(&self.http, &self.base_url, &self.auth, project_name).await
    }

    /// Get a database connection by name.
    pub async fn get_connection(
        &self,
        project_name: &str,
        connection_name: &str,
    ) -> Result<Connection> {
        endpoints::get_connection(
            &self.http,
            &self.base_url,
            &self.auth,
            project_name,
            connection_name,
        )
        .await
    }
}
