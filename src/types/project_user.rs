use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project user as returned by the API. All fields the server may omit
/// are optional; `labor_cost` and `rate` in particular are null unless set,
/// and a null is never collapsed into zero.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ProjectUser {
    /// When the project user was last modified.
    pub at: Option<DateTime<Utc>>,

    /// Group ID, legacy field.
    pub gid: Option<i64>,

    pub group_id: Option<i64>,

    /// Project user ID.
    pub id: Option<i64>,

    pub labor_cost: Option<i64>,

    pub labor_cost_last_updated: Option<DateTime<Utc>>,

    /// Whether the user is a manager of the project.
    pub manager: Option<bool>,

    pub project_id: Option<i64>,

    pub rate: Option<i64>,

    pub rate_last_updated: Option<DateTime<Utc>>,

    pub user_id: Option<i64>,

    pub workspace_id: Option<i64>,
}

/// Request body for adding a user to a project. Optional fields are
/// omitted from the payload when unset.
#[derive(Serialize, Debug, Clone, Default)]
pub struct NewProjectUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labour_cost: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<bool>,

    pub project_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<i64>,

    pub user_id: i64,
}
