//! State for the post-activity flow, seeded from the active goal.

use chrono::NaiveDate;
use shared::{
    dates, duration, ActivityPayload, DurationInput, EpochDate, FieldCheck, FormField,
    FormValidation, GoalDetails, GoalType, GoalUnit,
};

use super::submission::SubmissionState;

/// State for the post-activity form
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    /// Goal the activity is posted against
    pub goal_id: i64,

    /// Variant of that goal; duration goals skip the duration rules
    pub goal_type: GoalType,

    /// Unit inherited from the goal, not editable here
    pub goal_unit: GoalUnit,

    /// Hour, minute and second selections
    pub duration: DurationInput,

    /// Day the run happened
    pub activity_date: Option<NaiveDate>,

    /// Earliest selectable day: the goal's start, when it has one
    pub min_date: Option<NaiveDate>,

    /// Latest selectable day: today, or the goal's end when that comes
    /// first
    pub max_date: NaiveDate,

    /// Set on the first submit attempt; field errors render only after this
    pub submitted: bool,

    /// Where the form is in its submission lifecycle
    pub submission: SubmissionState,

    /// Outcome of the last submit attempt's validation
    pub validation: FormValidation,
}

impl ActivityForm {
    /// Fresh form against `goal`, dated today
    pub fn new(goal: &GoalDetails, today: NaiveDate) -> Self {
        let min_date = goal.start_date.and_then(EpochDate::to_naive_date);
        let max_date = goal
            .end_date
            .and_then(EpochDate::to_naive_date)
            .map_or(today, |end| end.min(today));

        Self {
            goal_id: goal.id,
            goal_type: goal.goal_type,
            goal_unit: goal.goal_unit,
            duration: DurationInput::default(),
            activity_date: Some(today),
            min_date,
            max_date,
            submitted: false,
            submission: SubmissionState::Editing,
            validation: FormValidation::default(),
        }
    }

    /// Check the duration selection. A zero total passes; only a negative
    /// total is flagged, which the select fields cannot produce on their
    /// own.
    pub fn duration_check(&self) -> FieldCheck {
        if duration::total_seconds(Some(&self.duration)) >= 0 {
            FieldCheck::valid(FormField::DurationHours)
        } else {
            FieldCheck::invalid(FormField::DurationHours, "Duration cannot be negative")
        }
    }

    /// Validate and, when the form is valid, hand back the wire payload.
    /// Duration goals track streaks rather than time, so they skip the
    /// duration rules.
    pub fn submit(&mut self) -> Option<ActivityPayload> {
        self.submitted = true;

        let mut validation = FormValidation::default();
        if self.activity_date.is_none() {
            validation.push(FieldCheck::invalid(
                FormField::ActivityDate,
                "Activity date is required",
            ));
        } else {
            validation.push(FieldCheck::valid(FormField::ActivityDate));
        }
        if self.goal_type == GoalType::DistanceGoal {
            validation.push(self.duration_check());
        }

        self.validation = validation;
        if !self.validation.is_valid() {
            return None;
        }

        let activity_date = self.activity_date?;
        Some(ActivityPayload {
            goal_unit: self.goal_unit,
            duration: duration::total_seconds(Some(&self.duration)),
            activity_date: dates::format_iso(activity_date),
        })
    }

    /// Check if the form can be submitted
    pub fn can_submit(&self) -> bool {
        self.submission.can_submit()
    }

    /// Lock the form for the one outstanding request
    pub fn start_submission(&mut self) {
        self.submission = SubmissionState::Submitting;
    }

    pub fn complete_submission(&mut self) {
        self.submission = SubmissionState::Succeeded;
    }

    /// A failed attempt keeps the form locked and the busy caption in place
    pub fn fail_submission(&mut self) {
        self.submission = SubmissionState::Failed;
    }

    /// Caption of the submit button. Once a submission starts the busy
    /// caption never reverts.
    pub fn button_text(&self) -> &'static str {
        match self.submission {
            SubmissionState::Editing => "Log your Run",
            _ => "Logging your run..",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn epoch(y: i32, m: u32, d: u32) -> EpochDate {
        let millis = date(y, m, d)
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis();
        EpochDate { time: millis }
    }

    fn distance_goal() -> GoalDetails {
        GoalDetails {
            id: 12,
            goal_type: GoalType::DistanceGoal,
            goal_unit: GoalUnit::Km,
            start_date: None,
            end_date: None,
            purpose: Some("Run 100 km".to_string()),
        }
    }

    fn duration_goal(start: EpochDate, end: EpochDate) -> GoalDetails {
        GoalDetails {
            id: 34,
            goal_type: GoalType::DurationGoal,
            goal_unit: GoalUnit::Mi,
            start_date: Some(start),
            end_date: Some(end),
            purpose: Some("Ten day streak".to_string()),
        }
    }

    #[test]
    fn test_new_form_inherits_the_goal() {
        let form = ActivityForm::new(&distance_goal(), date(2024, 6, 12));
        assert_eq!(form.goal_id, 12);
        assert_eq!(form.goal_unit, GoalUnit::Km);
        assert_eq!(form.activity_date, Some(date(2024, 6, 12)));
    }

    #[test]
    fn test_window_defaults_to_today_without_goal_dates() {
        let form = ActivityForm::new(&distance_goal(), date(2024, 6, 12));
        assert_eq!(form.min_date, None);
        assert_eq!(form.max_date, date(2024, 6, 12));
    }

    #[test]
    fn test_window_is_clamped_to_a_finished_goal() {
        let goal = duration_goal(epoch(2024, 6, 1), epoch(2024, 6, 10));
        let form = ActivityForm::new(&goal, date(2024, 6, 12));
        assert_eq!(form.min_date, Some(date(2024, 6, 1)));
        assert_eq!(form.max_date, date(2024, 6, 10));
    }

    #[test]
    fn test_window_is_clamped_to_today_for_a_running_goal() {
        let goal = duration_goal(epoch(2024, 6, 1), epoch(2024, 6, 30));
        let form = ActivityForm::new(&goal, date(2024, 6, 12));
        assert_eq!(form.max_date, date(2024, 6, 12));
    }

    #[test]
    fn test_zero_duration_still_submits() {
        let mut form = ActivityForm::new(&distance_goal(), date(2024, 6, 12));

        let payload = form.submit().unwrap();
        assert_eq!(payload.duration, 0);
        assert_eq!(payload.goal_unit, GoalUnit::Km);
        assert_eq!(payload.activity_date, "2024-06-12");
    }

    #[test]
    fn test_duration_components_convert_to_seconds() {
        let mut form = ActivityForm::new(&distance_goal(), date(2024, 6, 12));
        form.duration = DurationInput::new("01", "30", "00");

        let payload = form.submit().unwrap();
        assert_eq!(payload.duration, 5400);
    }

    #[test]
    fn test_submitted_payload_wire_shape() {
        let mut form = ActivityForm::new(&distance_goal(), date(2024, 6, 12));
        form.duration = DurationInput::new("00", "45", "30");

        let payload = form.submit().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["goalUnit"], "KM");
        assert_eq!(json["duration"], 2730);
        assert_eq!(json["activityDate"], "2024-06-12");
    }

    #[test]
    fn test_missing_date_blocks_submission() {
        let mut form = ActivityForm::new(&distance_goal(), date(2024, 6, 12));
        form.activity_date = None;

        assert!(form.submit().is_none());
        assert!(form.submitted);
        assert!(form.validation.field_invalid(FormField::ActivityDate));
    }

    #[test]
    fn test_duration_goal_skips_the_duration_rules() {
        let goal = duration_goal(epoch(2024, 6, 1), epoch(2024, 6, 30));
        let mut form = ActivityForm::new(&goal, date(2024, 6, 12));

        let payload = form.submit().unwrap();
        assert_eq!(payload.duration, 0);
        assert!(form.validation.is_valid());
    }

    #[test]
    fn test_submission_lifecycle_locks_the_form() {
        let mut form = ActivityForm::new(&distance_goal(), date(2024, 6, 12));
        assert_eq!(form.button_text(), "Log your Run");

        assert!(form.submit().is_some());
        form.start_submission();
        assert!(!form.can_submit());
        assert_eq!(form.button_text(), "Logging your run..");

        form.fail_submission();
        assert_eq!(form.button_text(), "Logging your run..");
        assert!(!form.can_submit());
    }
}
