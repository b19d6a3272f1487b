//! Resource client for the time-entries endpoints.

use crate::{
    query::{ListTimeEntriesQuery, MetaQuery, NoQuery, TimeEntryQuery},
    transport::{require, Endpoint, Transport},
    types::{BulkEditResult, NewTimeEntry, PatchOperation, TimeEntry},
    Error,
};

const TIME_ENTRIES_PATH: &str = "/api/v9/me/time_entries";
const CURRENT_TIME_ENTRY_PATH: &str = "/api/v9/me/time_entries/current";

fn time_entry_path(id: i64) -> String {
    format!("/api/v9/me/time_entries/{id}")
}
fn workspace_time_entries_path(workspace_id: i64) -> String {
    format!("/api/v9/workspaces/{workspace_id}/time_entries")
}
fn workspace_time_entry_path(workspace_id: i64, id: i64) -> String {
    format!("/api/v9/workspaces/{workspace_id}/time_entries/{id}")
}
fn bulk_edit_path(workspace_id: i64, ids: &str) -> String {
    format!("/api/v9/workspaces/{workspace_id}/time_entries/{ids}")
}
fn stop_path(workspace_id: i64, id: i64) -> String {
    format!("/api/v9/workspaces/{workspace_id}/time_entries/{id}/stop")
}

/// Input for [`TimeEntries::get`]. `time_entry_id` is required.
#[derive(Default)]
pub struct GetTimeEntryInput {
    pub time_entry_id: Option<i64>,
    pub query: TimeEntryQuery,
}

/// Input for [`TimeEntries::create`]. `workspace_id` is required.
#[derive(Default)]
pub struct CreateTimeEntryInput {
    pub workspace_id: Option<i64>,
    pub query: MetaQuery,
    pub body: NewTimeEntry,
}

/// Input for [`TimeEntries::bulk_edit`]. `workspace_id` and `time_entry_ids`
/// are required; the server accepts at most 100 IDs per request.
#[derive(Default)]
pub struct BulkEditTimeEntriesInput {
    pub workspace_id: Option<i64>,
    pub time_entry_ids: Option<Vec<i64>>,
    pub query: MetaQuery,
    pub ops: Vec<PatchOperation>,
}

/// Input for [`TimeEntries::update`]. Both identifiers are required.
#[derive(Default)]
pub struct UpdateTimeEntryInput {
    pub workspace_id: Option<i64>,
    pub time_entry_id: Option<i64>,
    pub query: TimeEntryQuery,
    pub body: NewTimeEntry,
}

/// Input for [`TimeEntries::delete`]. Both identifiers are required.
#[derive(Default)]
pub struct DeleteTimeEntryInput {
    pub workspace_id: Option<i64>,
    pub time_entry_id: Option<i64>,
}

/// Input for [`TimeEntries::stop`]. Both identifiers are required.
#[derive(Default)]
pub struct StopTimeEntryInput {
    pub workspace_id: Option<i64>,
    pub time_entry_id: Option<i64>,
}

/// Client for the time-entries resource. Obtained from
/// [`Client::time_entries`](crate::Client::time_entries).
pub struct TimeEntries<'a> {
    pub(crate) transport: &'a Transport,
}

impl TimeEntries<'_> {
    /// Lists the requester's time entries. A 404 yields an empty list.
    pub async fn list(&self, query: &ListTimeEntriesQuery) -> Result<Vec<TimeEntry>, Error> {
        let entries = self
            .transport
            .dispatch::<Vec<TimeEntry>, _, ()>(
                Endpoint::get(TIME_ENTRIES_PATH),
                Some(query),
                None,
            )
            .await?;
        Ok(entries.unwrap_or_default())
    }

    /// Fetches the currently running time entry, if any. The server answers
    /// with a null body or a 404 when nothing is running; both map to `None`.
    pub async fn current(&self) -> Result<Option<TimeEntry>, Error> {
        let entry = self
            .transport
            .dispatch::<Option<TimeEntry>, NoQuery, ()>(
                Endpoint::get(CURRENT_TIME_ENTRY_PATH),
                None,
                None,
            )
            .await?;
        Ok(entry.flatten())
    }

    /// Fetches a time entry by ID. A 404 yields `None`.
    pub async fn get(&self, input: GetTimeEntryInput) -> Result<Option<TimeEntry>, Error> {
        let id = require(input.time_entry_id, "time_entry_id")?;
        self.transport
            .dispatch::<TimeEntry, _, ()>(
                Endpoint::get(time_entry_path(id)),
                Some(&input.query),
                None,
            )
            .await
    }

    /// Creates a new time entry in the given workspace.
    pub async fn create(&self, input: CreateTimeEntryInput) -> Result<Option<TimeEntry>, Error> {
        let workspace_id = require(input.workspace_id, "workspace_id")?;
        self.transport
            .dispatch(
                Endpoint::post(workspace_time_entries_path(workspace_id)),
                Some(&input.query),
                Some(&input.body),
            )
            .await
    }

    /// Applies JSON-patch-style operations to up to 100 time entries at
    /// once, returning the provider's per-ID success/failure lists.
    pub async fn bulk_edit(
        &self,
        input: BulkEditTimeEntriesInput,
    ) -> Result<Option<BulkEditResult>, Error> {
        let workspace_id = require(input.workspace_id, "workspace_id")?;
        let ids = require(
            input.time_entry_ids.filter(|ids| !ids.is_empty()),
            "time_entry_ids",
        )?;
        let ids = ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.transport
            .dispatch(
                Endpoint::patch(bulk_edit_path(workspace_id, &ids)),
                Some(&input.query),
                Some(&input.ops),
            )
            .await
    }

    /// Replaces an existing time entry.
    pub async fn update(&self, input: UpdateTimeEntryInput) -> Result<Option<TimeEntry>, Error> {
        let workspace_id = require(input.workspace_id, "workspace_id")?;
        let id = require(input.time_entry_id, "time_entry_id")?;
        self.transport
            .dispatch(
                Endpoint::put(workspace_time_entry_path(workspace_id, id)),
                Some(&input.query),
                Some(&input.body),
            )
            .await
    }

    /// Deletes a time entry. A 404 counts as success: the entry is gone
    /// either way.
    pub async fn delete(&self, input: DeleteTimeEntryInput) -> Result<(), Error> {
        let workspace_id = require(input.workspace_id, "workspace_id")?;
        let id = require(input.time_entry_id, "time_entry_id")?;
        self.transport
            .dispatch_no_content::<NoQuery>(
                Endpoint::delete(workspace_time_entry_path(workspace_id, id)),
                None,
            )
            .await
    }

    /// Stops a running time entry. Unlike the other operations, a 404 is an
    /// error here: stopping an entry that does not exist is reported as
    /// [`Error::UnexpectedStatus`].
    pub async fn stop(&self, input: StopTimeEntryInput) -> Result<TimeEntry, Error> {
        let workspace_id = require(input.workspace_id, "workspace_id")?;
        let id = require(input.time_entry_id, "time_entry_id")?;
        self.transport
            .dispatch_strict::<TimeEntry, NoQuery, ()>(
                Endpoint::patch(stop_path(workspace_id, id)),
                None,
                None,
            )
            .await
    }
}
