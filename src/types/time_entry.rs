use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A time entry as returned by the API.
///
/// Every field the server may omit is optional. `None` means the field was
/// absent or null on the wire; it is never coalesced into a default, so an
/// explicit zero from the server stays distinguishable from "not set".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TimeEntry {
    /// When the entry was last updated.
    pub at: Option<DateTime<Utc>>,

    pub billable: Option<bool>,

    pub client_name: Option<String>,

    pub description: Option<String>,

    /// Duration in seconds. Negative for a running entry.
    pub duration: Option<i64>,

    pub duronly: Option<bool>,

    pub id: Option<i64>,

    pub permissions: Option<Vec<String>>,

    /// Project ID, legacy field.
    pub pid: Option<i64>,

    pub project_active: Option<bool>,

    pub project_billable: Option<bool>,

    pub project_color: Option<String>,

    pub project_id: Option<i64>,

    pub project_name: Option<String>,

    pub shared_with: Option<Vec<SharedWith>>,

    pub start: Option<DateTime<Utc>>,

    /// Stop time. Absent while the entry is running.
    pub stop: Option<DateTime<Utc>>,

    pub tag_ids: Option<Vec<i64>>,

    pub tags: Option<Vec<String>>,

    pub task_id: Option<i64>,

    pub task_name: Option<String>,

    /// Task ID, legacy field.
    pub tid: Option<i64>,

    /// Creator ID, legacy field.
    pub uid: Option<i64>,

    pub user_avatar_url: Option<String>,

    pub user_id: Option<i64>,

    pub user_name: Option<String>,

    /// Workspace ID, legacy field.
    pub wid: Option<i64>,

    pub workspace_id: Option<i64>,
}

/// Sharing details of a time entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SharedWith {
    pub accepted: bool,

    pub user_id: Option<i64>,

    pub user_name: Option<String>,
}

/// Request body for creating or replacing a time entry.
///
/// Optional fields are omitted from the payload entirely when unset, never
/// sent as null, to match the API's partial-update semantics.
#[derive(Serialize, Debug, Clone, Default)]
pub struct NewTimeEntry {
    /// Whether the entry is billable. Workspace default applies when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    /// Identifies the service/application that created the entry. Required.
    pub created_with: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Duration in seconds. For a running entry use a negative value,
    /// preferably -1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    /// Deprecated provider field, kept for wire compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duronly: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_metadata: Option<EventMetadata>,

    /// Project ID, legacy field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_with_user_ids: Option<Vec<i64>>,

    /// Start time in UTC. Required when creating an entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    /// If provided on creation, its date part takes precedence over the
    /// date part of `start`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Stop time in UTC. Omit for a running entry or when `duration` is
    /// given; if both are present, start + duration must equal stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<DateTime<Utc>>,

    /// "add" or "delete". Used when updating an existing entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_action: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i64>>,

    /// Tag names to add/remove. Unknown names are created automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,

    /// Task ID, legacy field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<i64>,

    /// Creator ID, legacy field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,

    /// Creator ID. Defaults to the requester when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Workspace ID, legacy field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<i64>,

    /// Workspace ID. Required.
    pub workspace_id: i64,
}

/// Event metadata attached to a created time entry.
#[derive(Serialize, Debug, Clone, Default)]
pub struct EventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_feature: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_goals_count: Option<i64>,
}

/// One JSON-patch-style operation for bulk editing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PatchOperation {
    pub op: PatchOp,

    /// Path to the field to patch, e.g. `/description`.
    pub path: String,

    /// New value for the field at `path`.
    pub value: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
}

/// Per-ID outcome lists returned by the bulk-edit endpoint, verbatim from
/// the provider.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BulkEditResult {
    /// The IDs for which the patch succeeded.
    #[serde(default)]
    pub success: Vec<i64>,

    #[serde(default)]
    pub failure: Vec<BulkEditFailure>,
}

/// A failed item in a bulk edit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BulkEditFailure {
    /// The ID for which the patch operation failed.
    pub id: i64,

    /// The operation failure reason.
    pub message: String,
}
