//! The coaching operations offered to the user. Each builds one prompt,
//! makes one completion call, and returns the reply.

use tracing::{info, warn};

use stride_core::models::goal::Goal;
use stride_core::models::progress::Progress;
use stride_core::models::task::Task;

use crate::client::InsightClient;
use crate::error::InsightError;
use crate::prompts;
use crate::suggestions::{self, SuggestedTask};

impl InsightClient {
    /// An inspirational message referencing the goal and its motivation.
    pub fn motivational_message(&self, goal: &Goal) -> Result<String, InsightError> {
        self.credential()?;
        self.complete(&prompts::motivational_message(goal))
    }

    /// Two or three new tasks that complement `current_tasks`.
    ///
    /// A response that cannot be parsed, whether the completion envelope or
    /// the task list inside it, yields an empty list rather than an error.
    /// Credential, transport and status failures still propagate.
    pub fn task_suggestions(
        &self,
        goal: &Goal,
        current_tasks: &[Task],
    ) -> Result<Vec<SuggestedTask>, InsightError> {
        self.credential()?;
        let parsed = self
            .complete(&prompts::task_suggestions(goal, current_tasks)?)
            .and_then(|reply| suggestions::parse_suggestions(&reply));
        match parsed {
            Ok(tasks) => {
                info!(goal_id = %goal.id, count = tasks.len(), "task suggestions parsed");
                Ok(tasks)
            }
            Err(e @ InsightError::ResponseParse(_)) => {
                warn!(goal_id = %goal.id, error = %e, "discarding unparseable task suggestions");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Completion-rate and improvement analysis over the check-in history.
    pub fn analyze_progress(
        &self,
        goal: &Goal,
        progress: &[Progress],
    ) -> Result<String, InsightError> {
        self.credential()?;
        self.complete(&prompts::analyze_progress(goal, progress)?)
    }

    /// Encouragement tailored to the most recent check-in.
    pub fn personalized_nudge(
        &self,
        goal: &Goal,
        progress: &[Progress],
    ) -> Result<String, InsightError> {
        self.credential()?;
        self.complete(&prompts::personalized_nudge(goal, progress)?)
    }

    /// SMART-criteria critique of the goal itself.
    pub fn goal_refinement(&self, goal: &Goal) -> Result<String, InsightError> {
        self.credential()?;
        self.complete(&prompts::goal_refinement(goal))
    }
}
