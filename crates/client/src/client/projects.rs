//! Project API methods for [`MalloyClient`].

use crate::client::MalloyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{About, Project};

impl MalloyClient {
    /// List the projects hosted on this server.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        endpoints::list_projects(&self.http, &self.base_url, &self.auth).await
    }

    /// Get metadata about a project.
    pub async fn get_about(&self, project_name: &str) -> Result<About> {
        endpoints::get_about(&self.http, &self.base_url, &self.auth, project_name).await
    }
}
