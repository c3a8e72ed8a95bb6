use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::progress::Progress;
use super::task::Task;

/// The single tracked objective and everything recorded against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub goal: String,
    pub motivation: String,
    pub consequences: String,
    pub benefits: String,
    pub created_at: jiff::Timestamp,
    /// Display order is insertion order.
    pub tasks: Vec<Task>,
    /// Chronological by construction.
    pub progress: Vec<Progress>,
}

/// The four free-text fields the user fills in when setting a goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDraft {
    pub goal: String,
    pub motivation: String,
    pub consequences: String,
    pub benefits: String,
}

impl Goal {
    /// Create a goal with a fresh id, no tasks and no progress.
    pub fn from_draft(draft: GoalDraft, created_at: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            goal: draft.goal,
            motivation: draft.motivation,
            consequences: draft.consequences,
            benefits: draft.benefits,
            created_at,
            tasks: Vec::new(),
            progress: Vec::new(),
        }
    }

    /// Tasks that have not been soft-deleted, in display order.
    pub fn active_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_active())
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn latest_progress(&self) -> Option<&Progress> {
        self.progress.last()
    }

    /// Fraction of active tasks marked completed, in `[0.0, 1.0]`.
    pub fn completion_rate(&self) -> f64 {
        let (total, done) = self
            .active_tasks()
            .fold((0usize, 0usize), |(total, done), t| {
                (total + 1, done + usize::from(t.completed))
            });
        if total == 0 {
            return 0.0;
        }
        done as f64 / total as f64
    }
}
