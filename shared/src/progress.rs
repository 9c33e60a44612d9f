use serde::{Deserialize, Serialize};

use crate::goal::GoalUnit;

/// Progress toward a distance goal as served by the goal service.
///
/// Distance totals are reported in the goal's own unit while the service
/// stores meters; the percentage is computed on the raw meter totals,
/// floored, and capped at 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub goal_unit: GoalUnit,
    pub goal: i64,
    pub total_distance_covered: i64,
    pub percentage: i64,
    pub activity_count: i64,
    pub average_pace: f64,
}

impl Progress {
    /// Derive display totals from raw meter and second sums.
    ///
    /// Average pace is minutes per unit of covered distance, zero when
    /// nothing is covered yet.
    pub fn from_raw(
        goal_unit: GoalUnit,
        goal_meters: i64,
        covered_meters: i64,
        activity_count: i64,
        total_duration_secs: i64,
    ) -> Self {
        let meters_per_unit = goal_unit.meters_per_unit();
        let goal = goal_meters / meters_per_unit;
        let total_distance_covered = covered_meters / meters_per_unit;

        let percentage = if goal_meters > 0 {
            let raw = ((covered_meters as f64 / goal_meters as f64) * 100.0).floor() as i64;
            raw.min(100)
        } else {
            0
        };

        let total_duration_mins = total_duration_secs / 60;
        let average_pace = if total_distance_covered != 0 {
            total_duration_mins as f64 / total_distance_covered as f64
        } else {
            0.0
        };

        Self {
            goal_unit,
            goal,
            total_distance_covered,
            percentage,
            activity_count,
            average_pace,
        }
    }
}
