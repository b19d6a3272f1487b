//! Resource client for the project-users endpoints.

use crate::{
    query::{NoQuery, ProjectUsersQuery},
    transport::{require, Endpoint, Transport},
    types::{NewProjectUser, ProjectUser},
    Error,
};

fn project_users_path(workspace_id: i64) -> String {
    format!("/api/v9/workspaces/{workspace_id}/project_users")
}

/// Input for [`ProjectUsers::list`]. `workspace_id` is required.
#[derive(Default)]
pub struct ListProjectUsersInput {
    pub workspace_id: Option<i64>,
    pub query: ProjectUsersQuery,
}

/// Input for [`ProjectUsers::add`]. `workspace_id` is required.
#[derive(Default)]
pub struct AddProjectUserInput {
    pub workspace_id: Option<i64>,
    pub body: NewProjectUser,
}

/// Client for the project-users resource. Obtained from
/// [`Client::project_users`](crate::Client::project_users).
pub struct ProjectUsers<'a> {
    pub(crate) transport: &'a Transport,
}

impl ProjectUsers<'_> {
    /// Lists the project users of a workspace. A 404 yields an empty list.
    pub async fn list(&self, input: ListProjectUsersInput) -> Result<Vec<ProjectUser>, Error> {
        let workspace_id = require(input.workspace_id, "workspace_id")?;
        let users = self
            .transport
            .dispatch::<Vec<ProjectUser>, _, ()>(
                Endpoint::get(project_users_path(workspace_id)),
                Some(&input.query),
                None,
            )
            .await?;
        Ok(users.unwrap_or_default())
    }

    /// Adds a user to a project in the workspace.
    pub async fn add(&self, input: AddProjectUserInput) -> Result<Option<ProjectUser>, Error> {
        let workspace_id = require(input.workspace_id, "workspace_id")?;
        self.transport
            .dispatch::<ProjectUser, NoQuery, _>(
                Endpoint::post(project_users_path(workspace_id)),
                None,
                Some(&input.body),
            )
            .await
    }
}
