pub mod create_goal_form;
pub mod date_picker;
pub mod goal_progress_card;
pub mod goal_type_picker;
pub mod post_activity_form;
pub mod toast;
