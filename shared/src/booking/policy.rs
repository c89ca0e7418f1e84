//! Hotel policy constants and stay-date arithmetic
//!
//! Stay dates are calendar dates; every day-based rule anchors them at the
//! hotel policy hours before comparing against a timestamp.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Hour of day at which a stay begins (14:00 UTC)
pub const CHECK_IN_HOUR: u32 = 14;

/// Hour of day at which a stay ends (12:00 UTC)
pub const CHECK_OUT_HOUR: u32 = 12;

/// Full refund when cancelling at least this many days before check-in
pub const FULL_REFUND_MIN_DAYS: i64 = 15;

/// Half refund when cancelling at least this many days before check-in
pub const HALF_REFUND_MIN_DAYS: i64 = 8;

/// Post-check-in cancellation is allowed within this many hours of the
/// actual check-in timestamp
pub const POST_CHECK_IN_CANCEL_HOURS: i64 = 24;

const MILLIS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// The instant a stay starting on `date` begins
pub fn check_in_instant(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(CHECK_IN_HOUR, 0, 0).expect("valid policy hour"))
}

/// The instant a stay ending on `date` ends
pub fn check_out_instant(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(CHECK_OUT_HOUR, 0, 0).expect("valid policy hour"))
}

/// Whole days from `now_ms` until `instant`, rounded up
///
/// Negative once the instant has passed (truncation toward zero is the
/// ceiling for negative durations).
pub fn days_until(instant: DateTime<Utc>, now_ms: i64) -> i64 {
    let secs = instant.timestamp() - now_ms / MILLIS_PER_SECOND;
    if secs > 0 {
        (secs + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
    } else {
        secs / SECONDS_PER_DAY
    }
}

/// Whole days until the check-in instant of a stay starting on `date`
pub fn days_until_check_in(date: NaiveDate, now_ms: i64) -> i64 {
    days_until(check_in_instant(date), now_ms)
}

/// Nights left before the check-out instant, never less than one
///
/// Room-change fees are pro-rated over this count.
pub fn remaining_nights(check_out: NaiveDate, now_ms: i64) -> i64 {
    days_until(check_out_instant(check_out), now_ms).max(1)
}

/// Whether a post-check-in cancellation is still inside the allowed window
pub fn within_post_check_in_window(actual_check_in_ms: i64, now_ms: i64) -> bool {
    let elapsed = now_ms - actual_check_in_ms;
    elapsed >= 0 && elapsed <= POST_CHECK_IN_CANCEL_HOURS * 3_600 * MILLIS_PER_SECOND
}
