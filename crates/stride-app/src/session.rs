//! The behavioural half of the dashboard: user actions become store actions,
//! and insight requests are layered on top with loading and error tracking.

use tracing::info;
use uuid::Uuid;

use stride_core::models::goal::{Goal, GoalDraft};
use stride_core::models::progress::CheckIn;
use stride_core::models::summary::ProgressSummary;
use stride_core::models::task::{Task, TaskDraft, TaskUpdate};
use stride_insight::client::InsightClient;
use stride_insight::error::InsightError;
use stride_insight::fanout;
use stride_insight::suggestions::SuggestedTask;
use stride_store::action::Action;
use stride_store::error::StoreError;
use stride_store::state::GoalState;
use stride_store::store::GoalStore;

use crate::error::AppError;
use crate::panel::InsightPanel;

pub struct Session {
    store: GoalStore,
    insights: InsightClient,
}

impl Session {
    pub fn new(insights: InsightClient) -> Self {
        Self::with_store(GoalStore::new(), insights)
    }

    pub fn with_store(store: GoalStore, insights: InsightClient) -> Self {
        Self { store, insights }
    }

    pub fn state(&self) -> &GoalState {
        self.store.state()
    }

    /// Mutable access for registering subscribers.
    pub fn store_mut(&mut self) -> &mut GoalStore {
        &mut self.store
    }

    pub fn goal(&self) -> Option<&Goal> {
        self.store.state().current_goal.as_ref()
    }

    pub fn set_goal(&mut self, draft: GoalDraft) -> Result<(), AppError> {
        self.store.dispatch(Action::SetGoal(draft))?;
        Ok(())
    }

    /// Add a task and return its id.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<Uuid, AppError> {
        let state = self.store.dispatch(Action::AddTask(draft))?;
        state
            .current_goal
            .as_ref()
            .and_then(|g| g.tasks.last())
            .map(|t| t.id)
            .ok_or(AppError::Store(StoreError::NoActiveGoal))
    }

    pub fn toggle_task(&mut self, task_id: Uuid) -> Result<(), AppError> {
        self.edit_task(task_id, TaskUpdate::ToggleCompleted)
    }

    pub fn delete_task(&mut self, task_id: Uuid) -> Result<(), AppError> {
        self.edit_task(task_id, TaskUpdate::SoftDelete)
    }

    pub fn edit_task(&mut self, task_id: Uuid, update: TaskUpdate) -> Result<(), AppError> {
        self.store.dispatch(Action::UpdateTask { task_id, update })?;
        Ok(())
    }

    pub fn check_in(&mut self, check_in: CheckIn) -> Result<(), AppError> {
        self.store.dispatch(Action::AddProgress(check_in))?;
        Ok(())
    }

    /// Tasks shown in lists and the check-in form.
    pub fn active_tasks(&self) -> Vec<Task> {
        self.goal()
            .map(|g| g.active_tasks().cloned().collect())
            .unwrap_or_default()
    }

    pub fn progress_summary(&self) -> Option<ProgressSummary> {
        self.goal()
            .map(|g| ProgressSummary::from_progress(&g.progress))
    }

    /// Fetch motivation, analysis and nudge for the active goal.
    ///
    /// With no goal this returns `Ok(None)` without contacting the service.
    /// Otherwise the store's `loading` flag is raised for the duration and a
    /// failure of any insight is recorded in the store's `error` field.
    pub async fn refresh_insights(&mut self) -> Result<Option<InsightPanel>, AppError> {
        let Some(goal) = self.goal().cloned() else {
            info!("no active goal; skipping insights");
            return Ok(None);
        };

        self.store.dispatch(Action::SetError(None))?;
        self.store.dispatch(Action::SetLoading(true))?;

        let result = fanout::fetch_insights(&self.insights, &goal).await;

        self.store.dispatch(Action::SetLoading(false))?;
        match result {
            Ok(bundle) => Ok(Some(InsightPanel::from_bundle(bundle))),
            Err(e) => {
                self.store.dispatch(Action::SetError(Some(e.to_string())))?;
                Err(e.into())
            }
        }
    }

    /// Ask the model for new tasks that complement the active ones.
    pub async fn suggest_tasks(&self) -> Result<Vec<SuggestedTask>, AppError> {
        let goal = self.goal().cloned().ok_or(StoreError::NoActiveGoal)?;
        let client = self.insights.clone();
        let tasks = tokio::task::spawn_blocking(move || {
            let active: Vec<Task> = goal.active_tasks().cloned().collect();
            client.task_suggestions(&goal, &active)
        })
        .await
        .map_err(|e| InsightError::Join(e.to_string()))??;
        Ok(tasks)
    }

    /// SMART-criteria feedback on the active goal.
    pub async fn refine_goal(&self) -> Result<String, AppError> {
        let goal = self.goal().cloned().ok_or(StoreError::NoActiveGoal)?;
        let client = self.insights.clone();
        let text = tokio::task::spawn_blocking(move || client.goal_refinement(&goal))
            .await
            .map_err(|e| InsightError::Join(e.to_string()))??;
        Ok(text)
    }
}
