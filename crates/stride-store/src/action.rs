use uuid::Uuid;

use stride_core::models::goal::GoalDraft;
use stride_core::models::progress::CheckIn;
use stride_core::models::task::{TaskDraft, TaskUpdate};

use crate::error::StoreError;
use crate::state::GoalState;

/// Every mutation the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetGoal(GoalDraft),
    AddTask(TaskDraft),
    UpdateTask { task_id: Uuid, update: TaskUpdate },
    AddProgress(CheckIn),
    SetLoading(bool),
    SetError(Option<String>),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetGoal(_) => "set_goal",
            Action::AddTask(_) => "add_task",
            Action::UpdateTask { .. } => "update_task",
            Action::AddProgress(_) => "add_progress",
            Action::SetLoading(_) => "set_loading",
            Action::SetError(_) => "set_error",
        }
    }
}

/// Compute the state that follows `state` under `action`.
pub fn reduce(state: &GoalState, action: Action) -> Result<GoalState, StoreError> {
    match action {
        Action::SetGoal(draft) => Ok(state.set_goal(draft)),
        Action::AddTask(draft) => state.add_task(draft),
        Action::UpdateTask { task_id, update } => state.update_task(task_id, update),
        Action::AddProgress(check_in) => state.add_progress(check_in),
        Action::SetLoading(loading) => Ok(state.set_loading(loading)),
        Action::SetError(error) => Ok(state.set_error(error)),
    }
}
