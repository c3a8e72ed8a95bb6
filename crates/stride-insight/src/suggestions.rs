//! Parsing of model-suggested tasks.
//!
//! Models often wrap JSON in a Markdown code fence and invent extra fields
//! (`id`, `completed`). Both are tolerated; only `description` is required.

use serde::{Deserialize, Deserializer, Serialize};

use stride_core::models::task::{Priority, TaskDraft};

use crate::error::InsightError;

/// A task proposed by the model, not yet part of the goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedTask {
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(
        default,
        alias = "dueDate",
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<jiff::civil::Date>,
}

impl SuggestedTask {
    pub fn into_draft(self) -> TaskDraft {
        TaskDraft {
            description: self.description,
            priority: self.priority,
            due_date: self.due_date,
        }
    }
}

/// Parse a reply into suggested tasks. Entries with a blank description are
/// dropped.
pub fn parse_suggestions(reply: &str) -> Result<Vec<SuggestedTask>, InsightError> {
    let json = strip_code_fence(reply);
    let tasks: Vec<SuggestedTask> = serde_json::from_str(json)
        .map_err(|e| InsightError::ResponseParse(format!("task suggestions: {e}")))?;
    Ok(tasks
        .into_iter()
        .filter(|t| !t.description.trim().is_empty())
        .collect())
}

/// Return the body of a surrounding ```` ``` ```` fence, or the trimmed input.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip an info string such as `json`; the body may follow on the same line.
    let body = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()).trim();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Accept a `YYYY-MM-DD` string; anything else (missing, null, prose) is `None`.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<jiff::civil::Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.trim().parse().ok()))
}
