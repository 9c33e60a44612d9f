use shared::Progress;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct GoalProgressCardProps {
    pub api_client: ApiClient,
    pub goal_id: i64,
    /// Bumped by the app root whenever an activity posts; each change
    /// triggers a refetch
    pub refresh_trigger: u32,
}

/// Progress summary for the active goal: covered distance, percentage and
/// average pace.
#[function_component(GoalProgressCard)]
pub fn goal_progress_card(props: &GoalProgressCardProps) -> Html {
    let progress = use_state(|| Option::<Progress>::None);
    let loading = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    {
        let api_client = props.api_client.clone();
        let goal_id = props.goal_id;
        let progress = progress.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with((goal_id, props.refresh_trigger), move |_| {
            spawn_local(async move {
                loading.set(true);
                error_message.set(None);

                match api_client.goal_progress(goal_id).await {
                    Ok(data) => progress.set(Some(data)),
                    Err(e) => {
                        gloo::console::error!(&format!("Failed to load progress: {}", e));
                        error_message.set(Some(format!("Failed to load progress: {}", e)));
                    }
                }

                loading.set(false);
            });

            || ()
        });
    }

    html! {
        <section class="goal-progress-card">
            <h2>{"Your progress"}</h2>

            {if let Some(error) = error_message.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if *loading && progress.is_none() {
                html! { <div class="progress-loading">{"Loading progress..."}</div> }
            } else if let Some(progress) = progress.as_ref() {
                html! {
                    <div class="progress-summary">
                        <div class="progress-bar-container">
                            <div class="progress-bar">
                                <div
                                    class="progress-fill"
                                    style={format!("width: {}%", progress.percentage)}
                                ></div>
                            </div>
                            <div class="progress-text">
                                {format!("{}% complete", progress.percentage)}
                            </div>
                        </div>

                        <div class="progress-info">
                            <div class="progress-item">
                                <span class="progress-label">{"Distance:"}</span>
                                <span class="progress-value">
                                    {format!(
                                        "{} of {} {}",
                                        progress.total_distance_covered,
                                        progress.goal,
                                        progress.goal_unit
                                    )}
                                </span>
                            </div>
                            <div class="progress-item">
                                <span class="progress-label">{"Activities:"}</span>
                                <span class="progress-value">{progress.activity_count}</span>
                            </div>
                            <div class="progress-item">
                                <span class="progress-label">{"Average pace:"}</span>
                                <span class="progress-value">
                                    {format!("{:.1} min/{}", progress.average_pace, progress.goal_unit)}
                                </span>
                            </div>
                        </div>
                    </div>
                }
            } else { html! {} }}
        </section>
    }
}
