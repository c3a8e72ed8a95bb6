//! Concurrent retrieval of the dashboard insights.
//!
//! The motivational message, progress analysis and nudge are independent, so
//! they run side by side on the blocking pool. [`fetch_insights`] is
//! all-or-nothing; [`fetch_insights_settled`] hands back each outcome for
//! callers that can show partial results.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use stride_core::models::goal::Goal;

use crate::client::InsightClient;
use crate::error::InsightError;

/// All three dashboard insights for one goal snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightBundle {
    pub motivation: String,
    pub analysis: String,
    pub nudge: String,
}

/// Per-insight outcomes of a fan-out.
#[derive(Debug)]
pub struct SettledInsights {
    pub motivation: Result<String, InsightError>,
    pub analysis: Result<String, InsightError>,
    pub nudge: Result<String, InsightError>,
}

impl SettledInsights {
    /// Collapse to a bundle, or the first error in
    /// motivation → analysis → nudge order.
    pub fn into_bundle(self) -> Result<InsightBundle, InsightError> {
        Ok(InsightBundle {
            motivation: self.motivation?,
            analysis: self.analysis?,
            nudge: self.nudge?,
        })
    }
}

/// Fetch the three insights concurrently; any failure fails the whole set.
pub async fn fetch_insights(
    client: &InsightClient,
    goal: &Goal,
) -> Result<InsightBundle, InsightError> {
    fetch_insights_settled(client, goal).await.into_bundle()
}

/// Fetch the three insights concurrently and report each outcome.
///
/// Every request reads the same immutable snapshot of `goal`.
pub async fn fetch_insights_settled(client: &InsightClient, goal: &Goal) -> SettledInsights {
    let snapshot = Arc::new(goal.clone());

    let (motivation, analysis, nudge) = tokio::join!(
        run_blocking(client, &snapshot, |c, g| c.motivational_message(g)),
        run_blocking(client, &snapshot, |c, g| c.analyze_progress(g, &g.progress)),
        run_blocking(client, &snapshot, |c, g| c.personalized_nudge(g, &g.progress)),
    );

    info!(
        goal_id = %goal.id,
        motivation_ok = motivation.is_ok(),
        analysis_ok = analysis.is_ok(),
        nudge_ok = nudge.is_ok(),
        "insight fan-out settled"
    );

    SettledInsights {
        motivation,
        analysis,
        nudge,
    }
}

async fn run_blocking<F>(
    client: &InsightClient,
    goal: &Arc<Goal>,
    op: F,
) -> Result<String, InsightError>
where
    F: FnOnce(&InsightClient, &Goal) -> Result<String, InsightError> + Send + 'static,
{
    let client = client.clone();
    let goal = Arc::clone(goal);
    tokio::task::spawn_blocking(move || op(&client, &goal))
        .await
        .map_err(|e| InsightError::Join(e.to_string()))?
}
