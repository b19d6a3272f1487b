//! Query builder for the project-users endpoints.

use url::Url;

use super::common::Query;

/// Query parameters for listing workspace project users.
#[derive(Clone, Default)]
pub struct ProjectUsersQuery {
    /// Numeric project IDs, separated by comma.
    pub project_ids: Option<String>,
    /// Numeric user ID to filter by.
    pub user_id: Option<String>,
    /// Include group members in the response.
    pub with_group_members: bool,
}

impl Query for ProjectUsersQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(project_ids) = &self.project_ids {
            url.query_pairs_mut()
                .append_pair("project_ids", project_ids.as_str());
        }
        if let Some(user_id) = &self.user_id {
            url.query_pairs_mut().append_pair("user_id", user_id.as_str());
        }
        url.query_pairs_mut()
            .append_pair("with_group_members", &self.with_group_members.to_string());
        url
    }
}

impl ProjectUsersQuery {
    pub fn with_project_ids(mut self, project_ids: &str) -> Self {
        self.project_ids = Some(project_ids.to_string());
        self
    }
    pub fn with_user_id(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }
    pub fn with_group_members(mut self, with_group_members: bool) -> Self {
        self.with_group_members = with_group_members;
        self
    }
}
