use serde::{Deserialize, Serialize};

use crate::goal::GoalUnit;

/// Duration as read from the hour/minute/second select fields.
///
/// Components stay as the raw option strings (`"00"`, `"05"`, ...);
/// conversion to seconds lives in [`crate::duration::total_seconds`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationInput {
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
}

impl DurationInput {
    pub fn new(hours: &str, minutes: &str, seconds: &str) -> Self {
        Self {
            hours: Some(hours.to_string()),
            minutes: Some(minutes.to_string()),
            seconds: Some(seconds.to_string()),
        }
    }
}

/// Request body for posting an activity against a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPayload {
    pub goal_unit: GoalUnit,
    /// Total duration in seconds, already converted from the select fields
    pub duration: i64,
    /// Fixed `YYYY-MM-DD`, independent of the browser locale
    pub activity_date: String,
}

/// Response after posting an activity; only the new id is consumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCreated {
    pub id: i64,
}

/// Notification handed to progress observers after an activity posts.
///
/// Observers refetch the named goal's progress; nothing else is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub goal_id: i64,
}
