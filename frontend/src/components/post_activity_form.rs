use chrono::NaiveDate;
use shared::{FormField, GoalDetails, ProgressUpdate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::date_picker::DatePicker;
use crate::components::toast::Toast;
use crate::services::api::ApiClient;
use crate::services::nav::{NavRequest, Route};
use crate::state::ActivityForm;

#[derive(Properties, PartialEq)]
pub struct PostActivityFormProps {
    pub api_client: ApiClient,
    /// Goal the activity is posted against
    pub goal: GoalDetails,
    pub on_navigate: Callback<NavRequest>,
    pub on_toast: Callback<Toast>,
    /// Notified after an activity posts so observers can refetch progress
    pub on_progress: Callback<ProgressUpdate>,
}

/// Activity logging flow. The selectable date window comes from the goal:
/// no earlier than its start, no later than today or its end, and never a
/// weekend.
#[function_component(PostActivityForm)]
pub fn post_activity_form(props: &PostActivityFormProps) -> Html {
    let form = {
        let goal = props.goal.clone();
        use_state(move || ActivityForm::new(&goal, chrono::Local::now().date_naive()))
    };

    let on_hours_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.duration.hours = Some(select.value());
            form.set(next);
        })
    };

    let on_minutes_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.duration.minutes = Some(select.value());
            form.set(next);
        })
    };

    let on_seconds_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.duration.seconds = Some(select.value());
            form.set(next);
        })
    };

    let on_date_change = {
        let form = form.clone();
        Callback::from(move |date: NaiveDate| {
            let mut next = (*form).clone();
            next.activity_date = Some(date);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let api_client = props.api_client.clone();
        let on_navigate = props.on_navigate.clone();
        let on_toast = props.on_toast.clone();
        let on_progress = props.on_progress.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !form.can_submit() {
                return;
            }

            let mut next = (*form).clone();
            let Some(payload) = next.submit() else {
                // Keep the failed validation for error rendering
                form.set(next);
                return;
            };
            let goal_id = next.goal_id;

            next.start_submission();
            form.set(next);

            let form = form.clone();
            let api_client = api_client.clone();
            let on_navigate = on_navigate.clone();
            let on_toast = on_toast.clone();
            let on_progress = on_progress.clone();

            spawn_local(async move {
                match api_client.post_activity(goal_id, &payload).await {
                    Ok(created) => {
                        let mut done = (*form).clone();
                        done.complete_submission();
                        form.set(done);

                        on_progress.emit(ProgressUpdate { goal_id });
                        on_toast.emit(Toast::success("Posted new activity"));
                        on_navigate.emit(NavRequest::Path(Route::Activity(created.id)));
                    }
                    Err(e) => {
                        let mut failed = (*form).clone();
                        failed.fail_submission();
                        form.set(failed);

                        match e.status() {
                            Some(status) => gloo::console::error!(&format!(
                                "Activity submission failed with status {}",
                                status
                            )),
                            None => gloo::console::error!(&format!(
                                "Activity submission failed: {}",
                                e
                            )),
                        }
                        on_toast.emit(Toast::error(
                            "Unable to post activity. Please try later.",
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

    let duration_select = |id: &str,
                          label: &str,
                          upper: u32,
                          value: Option<&String>,
                          onchange: Callback<Event>| {
        let current = value.cloned().unwrap_or_else(|| "00".to_string());
        html! {
            <div class="duration-field">
                <label for={id.to_string()}>{label}</label>
                <select id={id.to_string()} onchange={onchange} disabled={locked}>
                    {for (0..upper).map(|n| {
                        let option = format!("{:02}", n);
                        let selected = option == current;
                        html! {
                            <option value={option.clone()} selected={selected}>{option}</option>
                        }
                    })}
                </select>
            </div>
        }
    };

    html! {
        <section class="post-activity">
            <h2>{"Log your run"}</h2>

            <form class="post-activity-form" onsubmit={on_submit}>
                <div class="form-group duration-group">
                    {duration_select("activity-hours", "Hours", 24, form.duration.hours.as_ref(), on_hours_change)}
                    {duration_select("activity-minutes", "Minutes", 60, form.duration.minutes.as_ref(), on_minutes_change)}
                    {duration_select("activity-seconds", "Seconds", 60, form.duration.seconds.as_ref(), on_seconds_change)}
                    {field_error(FormField::DurationHours)}
                </div>

                <div class="form-group">
                    <DatePicker
                        selected_date={form.activity_date}
                        on_date_change={on_date_change}
                        disabled={locked}
                        label={Some("Activity date".to_string())}
                        min_date={form.min_date}
                        max_date={Some(form.max_date)}
                    />
                    {field_error(FormField::ActivityDate)}
                </div>

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
