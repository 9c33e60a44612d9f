use chrono::{Datelike, NaiveDate};
use shared::{dates, DatePickerMode};
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    /// Currently selected date, or None when nothing is chosen yet
    pub selected_date: Option<NaiveDate>,
    /// Callback when a day is picked
    pub on_date_change: Callback<NaiveDate>,
    /// Whether the picker is locked
    pub disabled: bool,
    /// Optional label above the input
    #[prop_or_default]
    pub label: Option<String>,
    /// Earliest selectable day, inclusive
    #[prop_or_default]
    pub min_date: Option<NaiveDate>,
    /// Latest selectable day, inclusive
    #[prop_or_default]
    pub max_date: Option<NaiveDate>,
    /// Selection granularity; weekends are excluded in day mode
    #[prop_or(DatePickerMode::Day)]
    pub mode: DatePickerMode,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let show_calendar = use_state(|| false);
    let calendar_ref = use_node_ref();

    let today = chrono::Local::now().date_naive();
    let anchor = props.selected_date.unwrap_or(today);

    let display_text = match props.selected_date {
        Some(date) if date == today => "Today".to_string(),
        Some(date) => format!("{} {}, {}", date.format("%B"), date.day(), date.year()),
        None => "Pick a date".to_string(),
    };

    // Month shown in the dropdown, starting at the selected date
    let calendar_month = use_state(|| anchor.month());
    let calendar_year = use_state(|| anchor.year());

    // One predicate decides which day buttons are enabled
    let selectable = {
        let min_date = props.min_date;
        let max_date = props.max_date;
        let mode = props.mode;
        move |date: NaiveDate| day_enabled(date, mode, min_date, max_date)
    };

    let toggle_calendar = {
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            show_calendar.set(!*show_calendar);
        })
    };

    let on_date_select = {
        let on_date_change = props.on_date_change.clone();
        let show_calendar = show_calendar.clone();
        Callback::from(move |date: NaiveDate| {
            on_date_change.emit(date);
            show_calendar.set(false);
        })
    };

    let on_today_click = {
        let on_date_change = props.on_date_change.clone();
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            on_date_change.emit(today);
            show_calendar.set(false);
        })
    };

    // Close the dropdown on any click outside of it
    {
        let show_calendar = show_calendar.clone();
        let calendar_ref = calendar_ref.clone();
        use_effect_with(*show_calendar, move |is_open| {
            let mut listener = None;
            if *is_open {
                if let Some(win) = window() {
                    listener = Some(gloo::events::EventListener::new(&win, "click", move |e| {
                        if let Some(target) = e.target() {
                            if let Ok(element) = target.dyn_into::<Element>() {
                                if let Some(calendar_element) = calendar_ref.cast::<Element>() {
                                    if !calendar_element.contains(Some(&element)) {
                                        show_calendar.set(false);
                                    }
                                }
                            }
                        }
                    }));
                }
            }
            move || drop(listener)
        });
    }

    let prev_month = {
        let calendar_month = calendar_month.clone();
        let calendar_year = calendar_year.clone();
        Callback::from(move |_: MouseEvent| {
            if *calendar_month == 1 {
                calendar_month.set(12);
                calendar_year.set(*calendar_year - 1);
            } else {
                calendar_month.set(*calendar_month - 1);
            }
        })
    };

    let next_month = {
        let calendar_month = calendar_month.clone();
        let calendar_year = calendar_year.clone();
        Callback::from(move |_: MouseEvent| {
            if *calendar_month == 12 {
                calendar_month.set(1);
                calendar_year.set(*calendar_year + 1);
            } else {
                calendar_month.set(*calendar_month + 1);
            }
        })
    };

    let month_caption = NaiveDate::from_ymd_opt(*calendar_year, *calendar_month, 1)
        .map(|first| first.format("%B %Y").to_string())
        .unwrap_or_default();

    let calendar_days = generate_calendar_days(*calendar_year, *calendar_month);

    html! {
        <div class="date-picker" ref={calendar_ref.clone()}>
            {if let Some(label) = &props.label {
                html! { <label class="date-picker-label">{label}</label> }
            } else { html! {} }}

            <div class="date-picker-input">
                <button
                    type="button"
                    class="date-display-button"
                    onclick={toggle_calendar}
                    disabled={props.disabled}
                >
                    <span class="date-text">{display_text}</span>
                    <span class="calendar-icon">{"📅"}</span>
                </button>

                {if *show_calendar && !props.disabled {
                    html! {
                        <div class="calendar-dropdown">
                            <div class="calendar-header">
                                <button type="button" class="nav-button" onclick={prev_month}>{"‹"}</button>
                                <span class="month-year">{month_caption}</span>
                                <button type="button" class="nav-button" onclick={next_month}>{"›"}</button>
                            </div>

                            <div class="calendar-grid">
                                <div class="weekday-header">
                                    <span>{"Sun"}</span>
                                    <span>{"Mon"}</span>
                                    <span>{"Tue"}</span>
                                    <span>{"Wed"}</span>
                                    <span>{"Thu"}</span>
                                    <span>{"Fri"}</span>
                                    <span>{"Sat"}</span>
                                </div>

                                <div class="calendar-days">
                                    {for calendar_days.iter().map(|day| {
                                        let on_date_select = on_date_select.clone();
                                        let date = day.date;
                                        let is_selectable = selectable(date);
                                        let is_selected = props.selected_date == Some(date);
                                        let is_today = date == today;

                                        html! {
                                            <button
                                                type="button"
                                                class={classes!(
                                                    "calendar-day",
                                                    day.in_current_month.then_some("current-month"),
                                                    (!day.in_current_month).then_some("other-month"),
                                                    is_selectable.then_some("valid"),
                                                    (!is_selectable).then_some("invalid"),
                                                    is_selected.then_some("selected"),
                                                    is_today.then_some("today")
                                                )}
                                                disabled={!is_selectable}
                                                onclick={Callback::from(move |_: MouseEvent| {
                                                    on_date_select.emit(date);
                                                })}
                                            >
                                                {date.day()}
                                            </button>
                                        }
                                    })}
                                </div>
                            </div>

                            <div class="calendar-footer">
                                <button
                                    type="button"
                                    class="today-button"
                                    disabled={!selectable(today)}
                                    onclick={on_today_click}
                                >
                                    {"Today"}
                                </button>
                            </div>
                        </div>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}

/// Whether a day button is enabled: selectable under the picker's mode and
/// inside the optional min/max window.
fn day_enabled(
    date: NaiveDate,
    mode: DatePickerMode,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
) -> bool {
    dates::is_selectable(date, mode)
        && min_date.map_or(true, |min| date >= min)
        && max_date.map_or(true, |max| date <= max)
}

#[derive(Clone, Copy, PartialEq)]
struct CalendarDay {
    date: NaiveDate,
    in_current_month: bool,
}

/// Lay out a 6-week grid for the given month: padding days from the
/// previous month, the month itself, then padding from the next month up
/// to 42 cells.
fn generate_calendar_days(year: i32, month: u32) -> Vec<CalendarDay> {
    let mut days = Vec::new();

    let days_in_current_month = dates::days_in_month(year, month);
    let first_day_of_week = dates::first_weekday_offset(year, month);

    let (prev_year, prev_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    let days_in_prev_month = dates::days_in_month(prev_year, prev_month);

    for i in 0..first_day_of_week {
        let day = days_in_prev_month - first_day_of_week + i + 1;
        if let Some(date) = NaiveDate::from_ymd_opt(prev_year, prev_month, day) {
            days.push(CalendarDay {
                date,
                in_current_month: false,
            });
        }
    }

    for day in 1..=days_in_current_month {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            days.push(CalendarDay {
                date,
                in_current_month: true,
            });
        }
    }

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let remaining = 42 - days.len() as u32;

    for day in 1..=remaining {
        if let Some(date) = NaiveDate::from_ymd_opt(next_year, next_month, day) {
            days.push(CalendarDay {
                date,
                in_current_month: false,
            });
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_always_six_weeks() {
        for (year, month) in [(2024, 2), (2024, 6), (2023, 2), (2024, 12), (2025, 1)] {
            assert_eq!(generate_calendar_days(year, month).len(), 42);
        }
    }

    #[test]
    fn test_grid_pads_with_the_neighbor_months() {
        // June 2024 starts on a Saturday, so six padding days lead in
        let days = generate_calendar_days(2024, 6);
        assert!(!days[0].in_current_month);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 5, 26).unwrap());
        assert!(days[6].in_current_month);
        assert_eq!(days[6].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        // 30 June days plus 6 leading leaves 6 trailing July days
        assert_eq!(days[41].date, NaiveDate::from_ymd_opt(2024, 7, 6).unwrap());
        assert!(!days[41].in_current_month);
    }

    #[test]
    fn test_grid_handles_year_boundaries() {
        let january = generate_calendar_days(2025, 1);
        // January 2025 starts on a Wednesday; padding comes from December 2024
        assert_eq!(
            january[0].date,
            NaiveDate::from_ymd_opt(2024, 12, 29).unwrap()
        );

        let december = generate_calendar_days(2024, 12);
        assert!(december
            .iter()
            .any(|d| d.date == NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
    }

    #[test]
    fn test_day_enabled_composes_window_and_weekend_rules() {
        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
        let min = Some(day(10));
        let max = Some(day(20));

        // 2024-06-12 is a Wednesday inside the window
        assert!(day_enabled(day(12), DatePickerMode::Day, min, max));
        // Outside the window on either side
        assert!(!day_enabled(day(7), DatePickerMode::Day, min, max));
        assert!(!day_enabled(day(21), DatePickerMode::Day, min, max));
        // 2024-06-15 is a Saturday inside the window
        assert!(!day_enabled(day(15), DatePickerMode::Day, min, max));
        // Without bounds only the weekend rule applies
        assert!(day_enabled(day(12), DatePickerMode::Day, None, None));
        assert!(!day_enabled(day(15), DatePickerMode::Day, None, None));
    }
}
