mod common;
pub use self::common::{NoQuery, Query};

mod time_entry;
pub use self::time_entry::{ListTimeEntriesQuery, MetaQuery, TimeEntryQuery};

mod project_user;
pub use self::project_user::ProjectUsersQuery;
