pub mod activity_form;
pub mod goal_form;
pub mod submission;

pub use activity_form::ActivityForm;
pub use goal_form::GoalForm;
