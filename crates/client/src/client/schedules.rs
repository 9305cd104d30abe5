//! Schedule methods for [`MalloyClient`].

use crate::client::MalloyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Schedule;

impl MalloyClient {
    /// List the schedules running against a package.
    pub async fn list_schedules(
        &self,
        project_name: &str,
        package_name: &str,
        version_id: Option<&str>,
    ) -> Result<Vec<Schedule>> {
        endpoints::list_schedules(
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
