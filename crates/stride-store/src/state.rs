use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use stride_core::models::goal::{Goal, GoalDraft};
use stride_core::models::progress::CheckIn;
use stride_core::models::task::{Task, TaskDraft, TaskUpdate};

use crate::error::StoreError;

/// Snapshot of the store as seen by subscribers.
///
/// `loading` and `error` belong to asynchronous work layered on top (insight
/// requests); the store itself never sets them except through
/// [`GoalState::set_loading`] and [`GoalState::set_error`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GoalState {
    pub current_goal: Option<Goal>,
    pub loading: bool,
    pub error: Option<String>,
}

impl GoalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any existing goal with a fresh one. Prior tasks and progress
    /// are discarded.
    pub fn set_goal(&self, draft: GoalDraft) -> GoalState {
        let goal = Goal::from_draft(draft, jiff::Timestamp::now());
        info!(goal_id = %goal.id, replaced = self.current_goal.is_some(), "goal set");
        GoalState {
            current_goal: Some(goal),
            ..self.clone()
        }
    }

    /// Append a new incomplete task to the active goal.
    pub fn add_task(&self, draft: TaskDraft) -> Result<GoalState, StoreError> {
        self.with_goal(|goal| {
            let task = Task::from_draft(draft);
            debug!(task_id = %task.id, position = goal.tasks.len(), "task added");
            goal.tasks.push(task);
            Ok(())
        })
    }

    /// Apply `update` to the task with `task_id`. An unknown id leaves the
    /// task list unchanged.
    pub fn update_task(&self, task_id: Uuid, update: TaskUpdate) -> Result<GoalState, StoreError> {
        self.with_goal(|goal| {
            match goal.tasks.iter_mut().find(|t| t.id == task_id) {
                Some(task) => {
                    debug!(task_id = %task_id, ?update, "task updated");
                    task.apply(update);
                }
                None => debug!(task_id = %task_id, "update for unknown task ignored"),
            }
            Ok(())
        })
    }

    /// Record a check-in stamped with the current time.
    ///
    /// The stamp never precedes the previous entry, so the progress list stays
    /// chronological even if the wall clock steps backwards.
    pub fn add_progress(&self, check_in: CheckIn) -> Result<GoalState, StoreError> {
        check_in.validate()?;
        self.with_goal(|goal| {
            let now = jiff::Timestamp::now();
            let date = match goal.latest_progress() {
                Some(last) if last.date > now => last.date,
                _ => now,
            };
            goal.progress.push(check_in.into_progress(date));
            debug!(entries = goal.progress.len(), "progress recorded");
            Ok(())
        })
    }

    pub fn set_loading(&self, loading: bool) -> GoalState {
        GoalState {
            loading,
            ..self.clone()
        }
    }

    pub fn set_error(&self, error: Option<String>) -> GoalState {
        GoalState {
            error,
            ..self.clone()
        }
    }

    /// Run `f` against a copy of the active goal and return the new state.
    fn with_goal<F>(&self, f: F) -> Result<GoalState, StoreError>
    where
        F: FnOnce(&mut Goal) -> Result<(), StoreError>,
    {
        let mut next = self.clone();
        let goal = next.current_goal.as_mut().ok_or(StoreError::NoActiveGoal)?;
        f(goal)?;
        Ok(next)
    }
}
