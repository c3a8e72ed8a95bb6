use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An actionable step toward the goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub description: String,
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<jiff::civil::Date>,
    /// Soft-delete marker. Deleted tasks stay in the goal's task list but are
    /// hidden from every active-task view.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// Fields supplied by the caller when adding a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<jiff::civil::Date>,
}

impl TaskDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: jiff::civil::Date) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// The closed set of edits a task accepts after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TaskUpdate {
    SetCompleted(bool),
    ToggleCompleted,
    SoftDelete,
    EditDescription(String),
    EditPriority(Priority),
    EditDueDate(Option<jiff::civil::Date>),
}

impl Task {
    /// Build a fresh, incomplete task from a draft.
    pub fn from_draft(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: draft.description,
            completed: false,
            priority: draft.priority,
            due_date: draft.due_date,
            deleted: false,
        }
    }

    /// Apply a single update in place. There is no undelete: `deleted` only
    /// ever moves from `false` to `true`.
    pub fn apply(&mut self, update: TaskUpdate) {
        match update {
            TaskUpdate::SetCompleted(completed) => self.completed = completed,
            TaskUpdate::ToggleCompleted => self.completed = !self.completed,
            TaskUpdate::SoftDelete => self.deleted = true,
            TaskUpdate::EditDescription(description) => self.description = description,
            TaskUpdate::EditPriority(priority) => self.priority = priority,
            TaskUpdate::EditDueDate(due_date) => self.due_date = due_date,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}
