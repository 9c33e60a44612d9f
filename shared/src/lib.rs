//! Types and pure helpers shared between the run-tracker frontend and the
//! goal service wire format.

pub mod activity;
pub mod dates;
pub mod duration;
pub mod goal;
pub mod progress;
pub mod validation;

pub use activity::{ActivityCreated, ActivityPayload, DurationInput, ProgressUpdate};
pub use dates::DatePickerMode;
pub use goal::{
    CreateGoalRequest, EpochDate, GoalCreated, GoalDetails, GoalType, GoalUnit, Profile,
};
pub use progress::Progress;
pub use validation::{FieldCheck, FormField, FormValidation};
