//! Historical record models supplied by the external store.

use serde::{Deserialize, Serialize};

/// Status value marking a task as done
pub const STATUS_COMPLETED: &str = "completed";

/// A previously stored group, used only as read-only training signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Stable group id
    pub id: String,
    /// Group name
    pub name: String,
    /// Free-text description of what the group worked on
    #[serde(default)]
    pub description: String,
    /// Number of members; missing values default to 0
    #[serde(default)]
    pub member_count: u32,
}

impl GroupRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            member_count: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_member_count(mut self, member_count: u32) -> Self {
        self.member_count = member_count;
        self
    }
}

/// A previously stored task, used only as read-only training signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Stable task id
    pub id: String,
    /// Id of the group the task belonged to
    pub group_id: String,
    /// Task title
    pub title: String,
    /// Free-text task description
    #[serde(default)]
    pub description: String,
    /// Open status string; only "completed" is interpreted
    #[serde(default)]
    pub status: String,
    /// Estimated effort in days, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_days: Option<u32>,
}

impl TaskRecord {
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            title: title.into(),
            description: String::new(),
            status: String::new(),
            estimated_days: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_estimated_days(mut self, days: u32) -> Self {
        self.estimated_days = Some(days);
        self
    }

    /// Whether the task reached completed status
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}
