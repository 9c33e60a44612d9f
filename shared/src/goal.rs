use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance unit a goal is denominated in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalUnit {
    #[default]
    #[serde(rename = "MI")]
    Mi,
    #[serde(rename = "KM")]
    Km,
}

impl GoalUnit {
    /// Meters per unit, used when converting stored meter totals for display
    pub fn meters_per_unit(self) -> i64 {
        match self {
            GoalUnit::Mi => 1609,
            GoalUnit::Km => 1000,
        }
    }
}

impl fmt::Display for GoalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalUnit::Mi => write!(f, "miles"),
            GoalUnit::Km => write!(f, "km"),
        }
    }
}

/// The two goal variants the creation flow can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalType {
    #[serde(rename = "DISTANCE_GOAL")]
    DistanceGoal,
    #[serde(rename = "DURATION_GOAL")]
    DurationGoal,
}

/// Request body for creating a goal.
///
/// The day count shown in the form is derived from the date range and has
/// no field here; only the resolved range itself goes over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub goal_unit: GoalUnit,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub purpose: String,
    pub goal_type: GoalType,
}

/// Response after creating a goal; only the new id is consumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCreated {
    pub id: i64,
}

/// Calendar date as the goal service serializes it: epoch milliseconds
/// under a `time` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochDate {
    pub time: i64,
}

impl EpochDate {
    /// Calendar day of this instant in UTC, or `None` if the millis are out
    /// of range
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        chrono::DateTime::from_timestamp_millis(self.time).map(|dt| dt.date_naive())
    }
}

/// Active goal as resolved by the goal service before the activity flow
/// starts.
///
/// Distance goals may carry no date range at all, so both bounds are
/// optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDetails {
    pub id: i64,
    pub goal_type: GoalType,
    pub goal_unit: GoalUnit,
    #[serde(default)]
    pub start_date: Option<EpochDate>,
    #[serde(default)]
    pub end_date: Option<EpochDate>,
    #[serde(default)]
    pub purpose: Option<String>,
}

/// Active profile of the signed-in runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub fullname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_goal_request_wire_shape() {
        let request = CreateGoalRequest {
            goal_unit: GoalUnit::Mi,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 10),
            purpose: "Run for 10 days".to_string(),
            goal_type: GoalType::DurationGoal,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["goalUnit"], "MI");
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["endDate"], "2024-01-10");
        assert_eq!(json["purpose"], "Run for 10 days");
        assert_eq!(json["goalType"], "DURATION_GOAL");
    }

    #[test]
    fn test_create_goal_request_has_no_day_count_field() {
        let request = CreateGoalRequest {
            goal_unit: GoalUnit::Km,
            start_date: date(2024, 3, 5),
            end_date: date(2024, 3, 14),
            purpose: "Spring training".to_string(),
            goal_type: GoalType::DistanceGoal,
        };

        let json = serde_json::to_value(&request).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();

        assert!(!keys.iter().any(|k| k.as_str() == "numberOfDays"));
        assert_eq!(keys.len(), 5);
        assert_eq!(json["goalType"], "DISTANCE_GOAL");
    }

    #[test]
    fn test_goal_unit_conversion_factors() {
        assert_eq!(GoalUnit::Mi.meters_per_unit(), 1609);
        assert_eq!(GoalUnit::Km.meters_per_unit(), 1000);
    }

    #[test]
    fn test_epoch_date_to_naive_date() {
        // 2024-06-15T00:00:00Z
        let epoch = EpochDate { time: 1718409600000 };
        assert_eq!(epoch.to_naive_date(), Some(date(2024, 6, 15)));

        // Mid-day instants resolve to the same calendar day
        let midday = EpochDate { time: 1718409600000 + 13 * 3600 * 1000 };
        assert_eq!(midday.to_naive_date(), Some(date(2024, 6, 15)));
    }

    #[test]
    fn test_goal_details_deserializes_with_missing_dates() {
        let json = r#"{
            "id": 42,
            "goalType": "DISTANCE_GOAL",
            "goalUnit": "MI",
            "purpose": "Run 100 miles"
        }"#;

        let goal: GoalDetails = serde_json::from_str(json).unwrap();

        assert_eq!(goal.id, 42);
        assert_eq!(goal.goal_type, GoalType::DistanceGoal);
        assert_eq!(goal.goal_unit, GoalUnit::Mi);
        assert!(goal.start_date.is_none());
        assert!(goal.end_date.is_none());
    }

    #[test]
    fn test_goal_details_deserializes_epoch_dates() {
        let json = r#"{
            "id": 7,
            "goalType": "DURATION_GOAL",
            "goalUnit": "KM",
            "startDate": {"time": 1718409600000},
            "endDate": {"time": 1719187200000},
            "purpose": "Ten day streak"
        }"#;

        let goal: GoalDetails = serde_json::from_str(json).unwrap();

        assert_eq!(
            goal.start_date.unwrap().to_naive_date(),
            Some(date(2024, 6, 15))
        );
        assert_eq!(
            goal.end_date.unwrap().to_naive_date(),
            Some(date(2024, 6, 24))
        );
    }
}
