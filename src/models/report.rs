use serde::Serialize;

/// Label used for entries recorded without any note.
pub const NO_DESCRIPTION: &str = "No Description";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskLine {
    pub name: String,
    pub seconds: u64,
}

impl TaskLine {
    pub fn is_described(&self) -> bool {
        self.name != NO_DESCRIPTION
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectGroup {
    pub customer: String,
    pub project: String,
    pub total_seconds: u64,
    /// Task buckets in first-seen order.
    pub tasks: Vec<TaskLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyReport {
    pub groups: Vec<ProjectGroup>,
    pub total_seconds: u64,
    pub includes_running: bool,
}
