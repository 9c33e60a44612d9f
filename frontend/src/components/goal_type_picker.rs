use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::nav::{NavRequest, Route};

#[derive(Properties, PartialEq)]
pub struct GoalTypePickerProps {
    pub on_navigate: Callback<NavRequest>,
}

/// Chooser between the two goal variants. Picking one routes to the
/// matching creation view.
#[function_component(GoalTypePicker)]
pub fn goal_type_picker(props: &GoalTypePickerProps) -> Html {
    let selected = use_state(|| "distance_goal".to_string());

    let on_option_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            selected.set(input.value());
        })
    };

    let on_continue = {
        let selected = selected.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            on_navigate.emit(NavRequest::Path(Route::for_goal_type(&selected)));
        })
    };

    html! {
        <section class="goal-type-picker">
            <h2>{"Start a new goal"}</h2>

            <div class="goal-type-options">
                <label class="goal-type-option">
                    <input
                        type="radio"
                        name="goal-type"
                        value="distance_goal"
                        checked={*selected == "distance_goal"}
                        onchange={on_option_change.clone()}
                    />
                    <span class="option-title">{"Distance goal"}</span>
                    <span class="option-hint">{"Cover a total distance at your own pace"}</span>
                </label>

                <label class="goal-type-option">
                    <input
                        type="radio"
                        name="goal-type"
                        value="duration_goal"
                        checked={*selected == "duration_goal"}
                        onchange={on_option_change}
                    />
                    <span class="option-title">{"Duration goal"}</span>
                    <span class="option-hint">{"Run every day for a stretch of days"}</span>
                </label>
            </div>

            <button class="btn btn-primary" onclick={on_continue}>
                {"Continue"}
            </button>
        </section>
    }
}
