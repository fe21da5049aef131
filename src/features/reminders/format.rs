//! Time rendering for reminder replies

use chrono::{DateTime, Local};

/// Remaining time until `fire_at`, floored to whole minutes
///
/// Renders `{h}h {m}m` once at least an hour remains, `{m}m` otherwise.
/// Overdue reminders render as `0m`.
pub fn format_remaining(fire_at: DateTime<Local>, now: DateTime<Local>) -> String {
    let total_minutes = fire_at.signed_duration_since(now).num_seconds().max(0) / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Wall-clock fire time in 24-hour `HH:MM`
pub fn format_clock(fire_at: DateTime<Local>) -> String {
    fire_at.format("%H:%M").to_string()
}
