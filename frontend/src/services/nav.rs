//! Navigation requests emitted by the form flows and resolved by the app
//! root, so the flows themselves never touch `window.location`.

/// In-app views the flows can route to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    CreateDistanceGoal,
    CreateDurationGoal,
    /// Detail view of a posted activity
    Activity(i64),
}

impl Route {
    /// Entry view for a goal-type selection. Anything unrecognized falls
    /// back to the distance goal view.
    pub fn for_goal_type(selection: &str) -> Self {
        match selection {
            "duration_goal" => Route::CreateDurationGoal,
            "distance_goal" => Route::CreateDistanceGoal,
            _ => Route::CreateDistanceGoal,
        }
    }

    pub fn path(self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::CreateDistanceGoal => "/goals/create_distance_goal".to_string(),
            Route::CreateDurationGoal => "/goals/create_duration_goal".to_string(),
            Route::Activity(id) => format!("/activity/{}", id),
        }
    }
}

/// One navigation request: an in-app route change, or a full-page location
/// change for targets served outside this app
#[derive(Debug, Clone, PartialEq)]
pub enum NavRequest {
    Path(Route),
    Href(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_type_selection_routes() {
        assert_eq!(
            Route::for_goal_type("distance_goal"),
            Route::CreateDistanceGoal
        );
        assert_eq!(
            Route::for_goal_type("duration_goal"),
            Route::CreateDurationGoal
        );
    }

    #[test]
    fn test_unrecognized_selection_falls_back_to_distance() {
        assert_eq!(Route::for_goal_type(""), Route::CreateDistanceGoal);
        assert_eq!(Route::for_goal_type("community_run"), Route::CreateDistanceGoal);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::CreateDistanceGoal.path(), "/goals/create_distance_goal");
        assert_eq!(Route::CreateDurationGoal.path(), "/goals/create_duration_goal");
        assert_eq!(Route::Activity(99).path(), "/activity/99");
    }
}
