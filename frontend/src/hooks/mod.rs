pub mod use_active_goal;
pub mod use_active_profile;

pub use use_active_goal::use_active_goal;
pub use use_active_profile::use_active_profile;
