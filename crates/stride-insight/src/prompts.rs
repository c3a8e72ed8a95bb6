//! Prompt builders. Each is a pure function of its inputs so the exact text
//! sent to the model can be asserted in tests.

use stride_core::models::goal::Goal;
use stride_core::models::progress::Progress;
use stride_core::models::task::Task;

pub const CONNECTION_PROBE: &str =
    "Hello, this is a test message. Please respond with \"Connection successful\"";
pub const CONNECTION_PROBE_REPLY: &str = "Connection successful";

pub fn motivational_message(goal: &Goal) -> String {
    format!(
        "Write a motivational message for someone working toward this goal: \"{}\".\n\
         Their motivation is: \"{}\".\n\
         Keep it inspiring but realistic, and refer to their specific goal and motivation.",
        goal.goal, goal.motivation
    )
}

pub fn task_suggestions(goal: &Goal, current_tasks: &[Task]) -> Result<String, serde_json::Error> {
    let tasks = serde_json::to_string(current_tasks)?;
    Ok(format!(
        "Given this goal: \"{}\" and these current tasks: {tasks},\n\
         suggest 2-3 new specific, actionable tasks that would help make progress.\n\
         Respond with only a JSON array. Each element must be an object with a \
         \"description\" string, a \"priority\" of \"high\", \"medium\" or \"low\", \
         and an optional \"due_date\" in YYYY-MM-DD format.",
        goal.goal
    ))
}

pub fn analyze_progress(goal: &Goal, progress: &[Progress]) -> Result<String, serde_json::Error> {
    let tasks = serde_json::to_string(&goal.tasks)?;
    let progress = serde_json::to_string(progress)?;
    Ok(format!(
        "Analyze the progress on this goal:\n\
         Goal: \"{}\"\n\
         Tasks: {tasks}\n\
         Progress entries: {progress}\n\
         \n\
         Give a detailed analysis covering:\n\
         1. Completion rate and patterns\n\
         2. Areas of strength\n\
         3. Potential areas for improvement\n\
         4. Specific recommendations for moving forward",
        goal.goal
    ))
}

pub fn personalized_nudge(goal: &Goal, progress: &[Progress]) -> Result<String, serde_json::Error> {
    let recent = match progress.last() {
        Some(entry) => serde_json::to_string(entry)?,
        None => "no check-ins yet".to_string(),
    };
    let overall = serde_json::to_string(progress)?;
    Ok(format!(
        "Write a personalized message of encouragement based on:\n\
         Goal: \"{}\"\n\
         Most recent check-in: {recent}\n\
         All check-ins: {overall}\n\
         \n\
         Make it empathetic and tailored to how they are doing right now, while keeping it motivating.",
        goal.goal
    ))
}

pub fn goal_refinement(goal: &Goal) -> String {
    format!(
        "Review this goal and give specific suggestions for improving it:\n\
         Goal: \"{}\"\n\
         Motivation: \"{}\"\n\
         \n\
         Consider:\n\
         1. Is it SMART (Specific, Measurable, Achievable, Relevant, Time-bound)?\n\
         2. Are there obstacles that have not been considered?\n\
         3. Could it be broken down differently?\n\
         4. Are there alternative approaches worth considering?",
        goal.goal, goal.motivation
    )
}
