//! Remaining time of an attendance session.
//!
//! The countdown is derived from the session's `created_at` and `duration`
//! only, so it can be recomputed on every tick without server state.

use chrono::{DateTime, Utc};

const MILLIS_PER_MINUTE: i64 = 60_000;

fn ends_at_ms(created_at: DateTime<Utc>, duration_minutes: u32) -> i64 {
    created_at.timestamp_millis() + i64::from(duration_minutes) * MILLIS_PER_MINUTE
}

/// Whole seconds left until `created_at + duration_minutes`, never negative.
///
/// `max(0, floor((created_at + duration * 60000 - now) / 1000))`
#[must_use]
pub fn remaining_seconds(
    created_at: DateTime<Utc>,
    duration_minutes: u32,
    now: DateTime<Utc>,
) -> i64 {
    let left_ms = ends_at_ms(created_at, duration_minutes) - now.timestamp_millis();
    left_ms.div_euclid(1000).max(0)
}

/// True once `now` has reached the end of the check-in window.
#[must_use]
pub fn is_expired(created_at: DateTime<Utc>, duration_minutes: u32, now: DateTime<Utc>) -> bool {
    now.timestamp_millis() >= ends_at_ms(created_at, duration_minutes)
}

/// `MM:SS`; minutes are not wrapped into hours.
#[must_use]
pub fn format_remaining(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
