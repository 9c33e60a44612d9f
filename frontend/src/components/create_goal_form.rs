use chrono::NaiveDate;
use shared::{FormField, GoalType, GoalUnit};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::date_picker::DatePicker;
use crate::components::toast::Toast;
use crate::services::api::ApiClient;
use crate::services::config::AppConfig;
use crate::services::nav::{NavRequest, Route};
use crate::state::GoalForm;

#[derive(Properties, PartialEq)]
pub struct CreateGoalFormProps {
    pub api_client: ApiClient,
    pub config: AppConfig,
    /// Which goal variant this view creates
    pub goal_type: GoalType,
    pub on_navigate: Callback<NavRequest>,
    pub on_toast: Callback<Toast>,
}

/// Goal creation flow. One component backs both entry views; the duration
/// variant additionally edits the date range and day count.
///
/// Submission is one-shot: once a request is in flight the form locks and
/// the outcome is a navigation, success toward the new goal's page and
/// failure back home.
#[function_component(CreateGoalForm)]
pub fn create_goal_form(props: &CreateGoalFormProps) -> Html {
    let today = chrono::Local::now().date_naive();
    let form = use_state(|| GoalForm::new(today));

    let on_unit_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.goal_unit = match select.value().as_str() {
                "KM" => GoalUnit::Km,
                _ => GoalUnit::Mi,
            };
            form.set(next);
        })
    };

    let on_purpose_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.purpose = input.value();
            form.set(next);
        })
    };

    let on_days_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.number_of_days = input.value().trim().parse::<i64>().ok();
            next.number_of_days_changed();
            form.set(next);
        })
    };

    let on_start_date_change = {
        let form = form.clone();
        Callback::from(move |date: NaiveDate| {
            let mut next = (*form).clone();
            next.start_date = Some(date);
            next.start_date_changed();
            form.set(next);
        })
    };

    let on_end_date_change = {
        let form = form.clone();
        Callback::from(move |date: NaiveDate| {
            let mut next = (*form).clone();
            next.end_date = Some(date);
            next.end_date_changed();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let api_client = props.api_client.clone();
        let config = props.config.clone();
        let goal_type = props.goal_type;
        let on_navigate = props.on_navigate.clone();
        let on_toast = props.on_toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !form.can_submit() {
                return;
            }

            let mut next = (*form).clone();
            let request = match goal_type {
                GoalType::DistanceGoal => next.submit_distance_goal(),
                GoalType::DurationGoal => next.submit_duration_goal(),
            };

            let Some(request) = request else {
                // Keep the failed validation for error rendering
                form.set(next);
                return;
            };

            next.start_submission();
            form.set(next);

            let form = form.clone();
            let api_client = api_client.clone();
            let config = config.clone();
            let on_navigate = on_navigate.clone();
            let on_toast = on_toast.clone();

            spawn_local(async move {
                match api_client.create_goal(&request).await {
                    Ok(created) => {
                        let mut done = (*form).clone();
                        done.complete_submission();
                        form.set(done);

                        on_toast.emit(Toast::success("Created new goal"));
                        on_navigate.emit(NavRequest::Href(
                            config.app_url(&format!("goals/{}", created.id)),
                        ));
                    }
                    Err(e) => {
                        let mut failed = (*form).clone();
                        failed.fail_submission();
                        form.set(failed);

                        match e.status() {
                            Some(status) => gloo::console::error!(&format!(
                                "Goal creation failed with status {}",
                                status
                            )),
                            None => gloo::console::error!(&format!(
                                "Goal creation failed: {}",
                                e
                            )),
                        }
                        on_toast.emit(Toast::error(
                            "Unable to create goal. Please try after sometime.",
                        ));
                        on_navigate.emit(NavRequest::Path(Route::Home));
                    }
                }
            });
        })
    };

    let locked = form.submission.locks_input();
    let field_error = |field: FormField| -> Html {
        match (form.submitted, form.validation.message_for(field)) {
            (true, Some(message)) => html! {
                <div class="field-error">{message}</div>
            },
            _ => html! {},
        }
    };

    let heading = match props.goal_type {
        GoalType::DistanceGoal => "Create a distance goal",
        GoalType::DurationGoal => "Create a duration goal",
    };

    html! {
        <section class="create-goal">
            <h2>{heading}</h2>

            <form class="create-goal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="goal-purpose">{"What are you running for?"}</label>
                    <input
                        type="text"
                        id="goal-purpose"
                        value={form.purpose.clone()}
                        oninput={on_purpose_change}
                        disabled={locked}
                    />
                    {field_error(FormField::Purpose)}
                </div>

                <div class="form-group">
                    <label for="goal-unit">{"Unit"}</label>
                    <select id="goal-unit" onchange={on_unit_change} disabled={locked}>
                        <option value="MI" selected={form.goal_unit == GoalUnit::Mi}>{"Miles"}</option>
                        <option value="KM" selected={form.goal_unit == GoalUnit::Km}>{"Kilometers"}</option>
                    </select>
                </div>

                {if props.goal_type == GoalType::DurationGoal {
                    html! {
                        <>
                            <div class="form-group">
                                <label for="goal-days">{"Number of days"}</label>
                                <input
                                    type="number"
                                    id="goal-days"
                                    min="1"
                                    value={form.number_of_days.map(|d| d.to_string()).unwrap_or_default()}
                                    oninput={on_days_change}
                                    disabled={locked}
                                />
                                {field_error(FormField::NumberOfDays)}
                            </div>

                            <div class="form-group">
                                <DatePicker
                                    selected_date={form.start_date}
                                    on_date_change={on_start_date_change}
                                    disabled={locked}
                                    label={Some("Start date".to_string())}
                                    min_date={Some(today)}
                                />
                                {field_error(FormField::StartDate)}
                            </div>

                            <div class="form-group">
                                <DatePicker
                                    selected_date={form.end_date}
                                    on_date_change={on_end_date_change}
                                    disabled={locked}
                                    label={Some("End date".to_string())}
                                    min_date={Some(today)}
                                />
                                {field_error(FormField::EndDate)}
                            </div>
                        </>
                    }
                } else { html! {} }}

                <div class="form-button-group">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled={!form.can_submit()}
                    >
                        {form.button_text()}
                    </button>
                </div>
            </form>
        </section>
    }
}
