use shared::GoalDetails;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct ActiveGoalState {
    pub goal: Option<GoalDetails>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ActiveGoalState {
    fn default() -> Self {
        Self {
            goal: None,
            loading: false,
            error: None,
        }
    }
}

/// Hook resolving the active goal once on mount.
///
/// A runner without a goal yet gets a not-found answer from the service;
/// that is reported as an empty state, not an error.
#[hook]
pub fn use_active_goal() -> UseStateHandle<ActiveGoalState> {
    let goal_state = use_state(ActiveGoalState::default);
    let api_client = ApiClient::new();

    use_effect_with((), {
        let goal_state = goal_state.clone();
        let api_client = api_client.clone();

        move |_| {
            goal_state.set(ActiveGoalState {
                goal: None,
                loading: true,
                error: None,
            });

            spawn_local(async move {
                match api_client.active_goal().await {
                    Ok(goal) => {
                        goal_state.set(ActiveGoalState {
                            goal: Some(goal),
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) if e.status() == Some(404) => {
                        goal_state.set(ActiveGoalState {
                            goal: None,
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        gloo::console::error!(&format!("Failed to load active goal: {}", e));
                        goal_state.set(ActiveGoalState {
                            goal: None,
                            loading: false,
                            error: Some(format!("Failed to load active goal: {}", e)),
                        });
                    }
                }
            });

            || ()
        }
    });

    goal_state
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_state_starts_empty_and_idle() {
        let state = ActiveGoalState::default();
        assert!(state.goal.is_none());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }
}
