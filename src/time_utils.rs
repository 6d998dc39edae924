// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for time-of-day arithmetic.

use chrono::{NaiveTime, Timelike};

/// Seconds elapsed since midnight, in `[0, 86399]`.
pub fn seconds_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 3600 + i64::from(time.minute()) * 60 + i64::from(time.second())
}

/// Signed number of seconds between two times of day.
///
/// Negative when `end` precedes `start`; the value is not clamped.
pub fn interval(start: NaiveTime, end: NaiveTime) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// Arithmetic mean. Returns `0.0` for an empty slice.
pub fn mean(items: &[i64]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().sum::<i64>() as f64 / items.len() as f64
}
