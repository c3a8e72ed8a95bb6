use serde::{Deserialize, Serialize};

use super::progress::Progress;

/// Aggregate view over a check-in history, as shown on the progress tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub check_ins: usize,
    pub average_mood: f64,
    pub average_focus: f64,
}

impl ProgressSummary {
    pub fn from_progress(progress: &[Progress]) -> Self {
        Self {
            check_ins: progress.len(),
            average_mood: average(progress.iter().map(|p| p.mood)),
            average_focus: average(progress.iter().map(|p| p.focus)),
        }
    }
}

/// A single chart point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: jiff::Timestamp,
    pub value: u8,
}

pub fn mood_series(progress: &[Progress]) -> Vec<SeriesPoint> {
    progress
        .iter()
        .map(|p| SeriesPoint {
            date: p.date,
            value: p.mood,
        })
        .collect()
}

pub fn focus_series(progress: &[Progress]) -> Vec<SeriesPoint> {
    progress
        .iter()
        .map(|p| SeriesPoint {
            date: p.date,
            value: p.focus,
        })
        .collect()
}

fn average(values: impl Iterator<Item = u8>) -> f64 {
    let (count, sum) = values.fold((0u32, 0u32), |(n, s), v| (n + 1, s + u32::from(v)));
    if count == 0 {
        return 0.0;
    }
    f64::from(sum) / f64::from(count)
}
