mod client;
mod errors;
mod project_users;
pub mod query;
mod time_entries;
mod transport;
pub mod types;

pub use self::client::Client;
pub use self::errors::Error;
pub use self::project_users::{AddProjectUserInput, ListProjectUsersInput, ProjectUsers};
pub use self::query::{
    ListTimeEntriesQuery, MetaQuery, NoQuery, ProjectUsersQuery, Query, TimeEntryQuery,
};
pub use self::time_entries::{
    BulkEditTimeEntriesInput, CreateTimeEntryInput, DeleteTimeEntryInput, GetTimeEntryInput,
    StopTimeEntryInput, TimeEntries, UpdateTimeEntryInput,
};
