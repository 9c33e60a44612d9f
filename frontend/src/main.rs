mod components;
mod hooks;
mod services;
mod state;

use shared::{GoalType, ProgressUpdate};
use yew::prelude::*;

use components::create_goal_form::CreateGoalForm;
use components::goal_progress_card::GoalProgressCard;
use components::goal_type_picker::GoalTypePicker;
use components::post_activity_form::PostActivityForm;
use components::toast::{Toast, ToastHost};
use hooks::{use_active_goal, use_active_profile};
use services::api::ApiClient;
use services::config::AppConfig;
use services::nav::{NavRequest, Route};

#[function_component(App)]
fn app() -> Html {
    let config = AppConfig::new();
    let api_client = ApiClient::with_config(config.clone());

    let view = use_state(|| Route::Home);
    let toast = use_state(|| Option::<Toast>::None);
    let progress_refresh = use_state(|| 0u32);

    let profile_state = use_active_profile();
    let goal_state = use_active_goal();

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |request: NavRequest| match request {
            NavRequest::Path(route) => view.set(route),
            NavRequest::Href(url) => {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().set_href(&url) {
                        gloo::console::error!("Failed to navigate:", e);
                    }
                }
            }
        })
    };

    let on_toast = {
        let toast = toast.clone();
        Callback::from(move |next: Toast| {
            toast.set(Some(next));
        })
    };

    let on_toast_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            toast.set(None);
        })
    };

    let on_progress = {
        let progress_refresh = progress_refresh.clone();
        Callback::from(move |_: ProgressUpdate| {
            progress_refresh.set(*progress_refresh + 1);
        })
    };

    let greeting = profile_state
        .profile
        .as_ref()
        .map(|profile| format!("Welcome, {}", profile.fullname))
        .unwrap_or_default();

    let content = match *view {
        Route::Home => {
            let goal_section = if goal_state.loading {
                html! { <div class="goal-loading">{"Loading your goal..."}</div> }
            } else if let Some(goal) = goal_state.goal.as_ref() {
                html! {
                    <>
                        <GoalProgressCard
                            api_client={api_client.clone()}
                            goal_id={goal.id}
                            refresh_trigger={*progress_refresh}
                        />
                        <PostActivityForm
                            api_client={api_client.clone()}
                            goal={goal.clone()}
                            on_navigate={on_navigate.clone()}
                            on_toast={on_toast.clone()}
                            on_progress={on_progress.clone()}
                        />
                    </>
                }
            } else {
                html! {}
            };

            html! {
                <>
                    {goal_section}
                    <GoalTypePicker on_navigate={on_navigate.clone()} />
                </>
            }
        }
        Route::CreateDistanceGoal => html! {
            <CreateGoalForm
                api_client={api_client.clone()}
                config={config.clone()}
                goal_type={GoalType::DistanceGoal}
                on_navigate={on_navigate.clone()}
                on_toast={on_toast.clone()}
            />
        },
        Route::CreateDurationGoal => html! {
            <CreateGoalForm
                api_client={api_client.clone()}
                config={config.clone()}
                goal_type={GoalType::DurationGoal}
                on_navigate={on_navigate.clone()}
                on_toast={on_toast.clone()}
            />
        },
        Route::Activity(id) => {
            let back_home = {
                let on_navigate = on_navigate.clone();
                Callback::from(move |_: MouseEvent| {
                    on_navigate.emit(NavRequest::Path(Route::Home));
                })
            };
            html! {
                <section class="activity-detail">
                    <h2>{"Run logged"}</h2>
                    <p>{format!("Activity #{} is on the books.", id)}</p>
                    <button class="btn btn-secondary" onclick={back_home}>
                        {"Back to your goal"}
                    </button>
                </section>
            }
        }
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Run Tracker"}</h1>
                <span class="greeting">{greeting}</span>
            </header>

            <ToastHost toast={(*toast).clone()} on_dismiss={on_toast_dismiss} />

            <main class="app-content">
                {content}
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
