//! State for the goal creation flow.
//!
//! One struct backs both entry views: the duration view edits the date
//! range and day count, the distance view leans on their defaults. The day
//! count and end date are derived from each other and resynchronized in
//! whichever direction the user last edited.

use chrono::NaiveDate;
use shared::{
    dates, CreateGoalRequest, FieldCheck, FormField, FormValidation, GoalType, GoalUnit,
};

use super::submission::SubmissionState;

/// Day count a fresh form starts with
pub const DEFAULT_NUMBER_OF_DAYS: i64 = 10;

/// Purpose a fresh form starts with
pub const DEFAULT_PURPOSE: &str = "Run for 10 days";

/// State for the goal creation form
#[derive(Debug, Clone, PartialEq)]
pub struct GoalForm {
    /// Unit the goal is denominated in
    pub goal_unit: GoalUnit,

    /// Day count input; `None` while the field is cleared
    pub number_of_days: Option<i64>,

    /// First day of the goal window
    pub start_date: Option<NaiveDate>,

    /// Last day of the goal window
    pub end_date: Option<NaiveDate>,

    /// Free-text purpose input
    pub purpose: String,

    /// Set on the first submit attempt; field errors render only after this
    pub submitted: bool,

    /// Where the form is in its submission lifecycle
    pub submission: SubmissionState,

    /// Outcome of the last submit attempt's validation
    pub validation: FormValidation,
}

impl GoalForm {
    /// Fresh form: ten days of running in miles, starting today
    pub fn new(today: NaiveDate) -> Self {
        Self {
            goal_unit: GoalUnit::Mi,
            number_of_days: Some(DEFAULT_NUMBER_OF_DAYS),
            start_date: Some(today),
            end_date: dates::add_days(today, DEFAULT_NUMBER_OF_DAYS),
            purpose: DEFAULT_PURPOSE.to_string(),
            submitted: false,
            submission: SubmissionState::Editing,
            validation: FormValidation::default(),
        }
    }

    /// Resynchronize the end date after the day count changed. A cleared or
    /// zero count leaves the end date as it was, and so does a count the
    /// calendar cannot represent; the submit-time checks are the ones that
    /// reject counts below one.
    pub fn number_of_days_changed(&mut self) {
        if let (Some(days), Some(start)) = (self.number_of_days, self.start_date) {
            if days != 0 {
                if let Some(end) = dates::add_days(start, days) {
                    self.end_date = Some(end);
                }
            }
        }
    }

    /// Resynchronize the day count after the start date changed. The end
    /// date stays where the user put it.
    pub fn start_date_changed(&mut self) {
        self.recompute_number_of_days();
    }

    /// Resynchronize the day count after the end date changed
    pub fn end_date_changed(&mut self) {
        self.recompute_number_of_days();
    }

    fn recompute_number_of_days(&mut self) {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            self.number_of_days = Some(dates::days_between_inclusive(start, end));
        }
    }

    /// Check the date ordering: the start must fall strictly before the
    /// end. With either date missing there is nothing to compare.
    pub fn date_range_check(&self) -> FieldCheck {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start >= end => FieldCheck::invalid(
                FormField::StartDate,
                "Start date should be before end date",
            ),
            _ => FieldCheck::valid(FormField::StartDate),
        }
    }

    /// Validate and, when the form is valid, hand back the request body for
    /// a distance goal.
    pub fn submit_distance_goal(&mut self) -> Option<CreateGoalRequest> {
        self.submit(GoalType::DistanceGoal)
    }

    /// Validate and, when the form is valid, hand back the request body for
    /// a duration goal. On top of the required fields this checks the date
    /// ordering.
    pub fn submit_duration_goal(&mut self) -> Option<CreateGoalRequest> {
        self.submit(GoalType::DurationGoal)
    }

    fn submit(&mut self, goal_type: GoalType) -> Option<CreateGoalRequest> {
        self.submitted = true;

        let mut validation = FormValidation::default();
        if self.purpose.trim().is_empty() {
            validation.push(FieldCheck::invalid(
                FormField::Purpose,
                "Purpose cannot be empty",
            ));
        } else {
            validation.push(FieldCheck::valid(FormField::Purpose));
        }

        if goal_type == GoalType::DurationGoal {
            match self.number_of_days {
                Some(days) if days >= 1 => {
                    validation.push(FieldCheck::valid(FormField::NumberOfDays));
                }
                _ => validation.push(FieldCheck::invalid(
                    FormField::NumberOfDays,
                    "Number of days should be at least 1",
                )),
            }
            if self.start_date.is_none() {
                validation.push(FieldCheck::invalid(
                    FormField::StartDate,
                    "Start date is required",
                ));
            }
            if self.end_date.is_none() {
                validation.push(FieldCheck::invalid(
                    FormField::EndDate,
                    "End date is required",
                ));
            }
            validation.push(self.date_range_check());
        }

        self.validation = validation;
        if !self.validation.is_valid() {
            return None;
        }

        // Distance goals keep the defaulted window; if the user managed to
        // clear a date anyway there is nothing valid to send.
        let start_date = self.start_date?;
        let end_date = self.end_date?;
        Some(CreateGoalRequest {
            goal_unit: self.goal_unit,
            start_date,
            end_date,
            purpose: self.purpose.trim().to_string(),
            goal_type,
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

    /// A failed attempt keeps the form locked and the busy caption in
    /// place; the flow hands control back to the home view instead of
    /// offering a retry.
    pub fn fail_submission(&mut self) {
        self.submission = SubmissionState::Failed;
    }

    /// Caption of the submit button. Once a submission starts the busy
    /// caption never reverts.
    pub fn button_text(&self) -> &'static str {
        match self.submission {
            SubmissionState::Editing => "Create",
            _ => "Creating Goal..",
        }
    }
}
