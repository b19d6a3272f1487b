mod time_entry;
pub use self::time_entry::{
    BulkEditFailure, BulkEditResult, EventMetadata, NewTimeEntry, PatchOp, PatchOperation,
    SharedWith, TimeEntry,
};

mod project_user;
pub use self::project_user::{NewProjectUser, ProjectUser};
