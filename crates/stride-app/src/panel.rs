use serde::{Deserialize, Serialize};

use stride_insight::fanout::InsightBundle;

/// Insight text shaped for display: the analysis is broken into one point per
/// non-empty line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightPanel {
    pub motivation: String,
    pub progress_points: Vec<String>,
    pub nudge: String,
}

impl InsightPanel {
    pub fn from_bundle(bundle: InsightBundle) -> Self {
        let progress_points = bundle
            .analysis
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            motivation: bundle.motivation,
            progress_points,
            nudge: bundle.nudge,
        }
    }
}
