pub mod memory;
pub mod models;

use crate::error::Result;
pub use memory::InMemoryHistory;
pub use models::{GroupRecord, TaskRecord};

/// Read-only access to previously stored groups and tasks.
///
/// The engine never performs I/O itself; callers implement this trait over
/// whatever store actually holds the records. Fetches must be independent
/// and side-effect free, since the engine may issue them concurrently.
pub trait HistoryStore: Send + Sync {
    /// All known historical groups
    fn fetch_all_groups(&self) -> Result<Vec<GroupRecord>>;
    /// Tasks belonging to one group
    fn fetch_group_tasks(&self, group_id: &str) -> Result<Vec<TaskRecord>>;
    /// All known historical tasks across groups
    fn fetch_all_tasks(&self) -> Result<Vec<TaskRecord>>;
}
