//! Vec-backed history store for tests and embedding callers.

use crate::error::Result;

use super::models::{GroupRecord, TaskRecord};
use super::HistoryStore;

/// In-memory `HistoryStore` holding records supplied up front.
///
/// Useful for tests and for callers that already have the collections in
/// hand and only need to satisfy the trait seam.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    groups: Vec<GroupRecord>,
    tasks: Vec<TaskRecord>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(groups: Vec<GroupRecord>, tasks: Vec<TaskRecord>) -> Self {
        Self { groups, tasks }
    }

    pub fn add_group(&mut self, group: GroupRecord) -> &mut Self {
        self.groups.push(group);
        self
    }

    pub fn add_task(&mut self, task: TaskRecord) -> &mut Self {
        self.tasks.push(task);
        self
    }
}

impl HistoryStore for InMemoryHistory {
    fn fetch_all_groups(&self) -> Result<Vec<GroupRecord>> {
        Ok(self.groups.clone())
    }

    fn fetch_group_tasks(&self, group_id: &str) -> Result<Vec<TaskRecord>> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.group_id == group_id)
            .cloned()
            .collect())
    }

    fn fetch_all_tasks(&self) -> Result<Vec<TaskRecord>> {
        Ok(self.tasks.clone())
    }
}
