//! Conversion from the structured duration input to total seconds.

use crate::activity::DurationInput;

/// Convert a structured duration to total seconds.
///
/// The select fields report `"00"` for an untouched component, and a
/// component can be unset entirely; both count as zero. A wholly absent
/// input converts to zero, so posting with nothing selected yields a
/// duration of 0. Every caller that needs seconds goes through this one
/// function.
pub fn total_seconds(input: Option<&DurationInput>) -> i64 {
    match input {
        Some(duration) => {
            component_value(duration.hours.as_deref()) * 60 * 60
                + component_value(duration.minutes.as_deref()) * 60
                + component_value(duration.seconds.as_deref())
        }
        None => 0,
    }
}

fn component_value(component: Option<&str>) -> i64 {
    match component {
        Some(value) if !value.is_empty() && value != "00" => value.parse().unwrap_or(0),
        _ => 0,
    }
}
