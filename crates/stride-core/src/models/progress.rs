use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;

/// One daily check-in. Append-only once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub date: jiff::Timestamp,
    pub mood: u8,
    pub focus: u8,
    /// Tasks the user marked done at check-in time. Back-references only:
    /// deleting a task later does not rewrite this set.
    pub completed_tasks: BTreeSet<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields supplied by the caller when submitting a check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub mood: u8,
    pub focus: u8,
    #[serde(default)]
    pub completed_tasks: BTreeSet<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for CheckIn {
    /// Mid-scale defaults, matching the check-in form's initial slider values.
    fn default() -> Self {
        Self {
            mood: 5,
            focus: 5,
            completed_tasks: BTreeSet::new(),
            notes: None,
        }
    }
}

impl CheckIn {
    pub fn new(mood: u8, focus: u8) -> Self {
        Self {
            mood,
            focus,
            ..Self::default()
        }
    }

    pub fn with_completed(mut self, tasks: impl IntoIterator<Item = Uuid>) -> Self {
        self.completed_tasks.extend(tasks);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check both ratings against `[RATING_MIN, RATING_MAX]`.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_rating("mood", self.mood)?;
        validate_rating("focus", self.focus)
    }

    /// Stamp the check-in with `date`. Blank notes are dropped.
    pub fn into_progress(self, date: jiff::Timestamp) -> Progress {
        Progress {
            date,
            mood: self.mood,
            focus: self.focus,
            completed_tasks: self.completed_tasks,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

pub fn validate_rating(field: &'static str, value: u8) -> Result<(), CoreError> {
    if (RATING_MIN..=RATING_MAX).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::InvalidRange {
            field,
            value,
            min: RATING_MIN,
            max: RATING_MAX,
        })
    }
}
