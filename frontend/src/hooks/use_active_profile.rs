use shared::Profile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct ActiveProfileState {
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ActiveProfileState {
    fn default() -> Self {
        Self {
            profile: None,
            loading: false,
            error: None,
        }
    }
}

/// Hook resolving the signed-in runner's profile once on mount
#[hook]
pub fn use_active_profile() -> UseStateHandle<ActiveProfileState> {
    let profile_state = use_state(ActiveProfileState::default);
    let api_client = ApiClient::new();

    use_effect_with((), {
        let profile_state = profile_state.clone();
        let api_client = api_client.clone();

        move |_| {
            profile_state.set(ActiveProfileState {
                profile: None,
                loading: true,
                error: None,
            });

            spawn_local(async move {
                match api_client.active_profile().await {
                    Ok(profile) => {
                        profile_state.set(ActiveProfileState {
                            profile: Some(profile),
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        gloo::console::error!(&format!("Failed to load active profile: {}", e));
                        profile_state.set(ActiveProfileState {
                            profile: None,
                            loading: false,
                            error: Some(format!("Failed to load active profile: {}", e)),
                        });
                    }
                }
            });

            || ()
        }
    });

    profile_state
}
