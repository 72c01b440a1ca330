//! Pure countdown arithmetic and label rendering.
//!
//! Nothing here reads the clock: callers pass `now` in so the same pair of
//! instants always yields the same duration and label.

use chrono::{DateTime, TimeZone};

use super::models::CountdownDuration;

/// Time left from `now` until `deadline`, negative once the deadline passed.
pub fn compute_duration<A, B>(deadline: &DateTime<A>, now: &DateTime<B>) -> CountdownDuration
where
    A: TimeZone,
    B: TimeZone,
{
    let total = deadline
        .clone()
        .signed_duration_since(now.clone())
        .num_milliseconds();
    CountdownDuration::from_millis(total)
}

/// Day count shown to the user: the current partial day counts as one and a
/// passed deadline never reads below zero.
pub fn display_days(duration: &CountdownDuration) -> i64 {
    duration.days.saturating_add(1).max(0)
}

/// `"1 day"` for exactly one, `"{n} days"` otherwise.
pub fn render_days_remaining(duration: &CountdownDuration) -> String {
    pluralize(display_days(duration), "day")
}

/// English count label; appends `s` for every count other than one.
pub fn pluralize(count: i64, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
