// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekday aggregation of a user's presence days.

use crate::models::{UserPresence, WeekdayBuckets};
use crate::time_utils::{interval, seconds_since_midnight};
use chrono::Datelike;

/// Time in office per day, grouped by weekday in encounter order.
pub fn group_by_weekday(days: &UserPresence) -> WeekdayBuckets {
    let mut result = WeekdayBuckets::new();
    for (date, day) in days {
        result.push(weekday_index(date), interval(day.start, day.end));
    }
    result
}

/// Arrival and departure offsets, grouped by weekday.
///
/// Returns `(starts, ends)`.
pub fn group_by_weekday_start_end(days: &UserPresence) -> (WeekdayBuckets, WeekdayBuckets) {
    let mut starts = WeekdayBuckets::new();
    let mut ends = WeekdayBuckets::new();
    for (date, day) in days {
        let weekday = weekday_index(date);
        starts.push(weekday, seconds_since_midnight(day.start));
        ends.push(weekday, seconds_since_midnight(day.end));
    }
    (starts, ends)
}

/// Mean arrival and departure per weekday, Monday first.
pub fn mean_start_end(days: &UserPresence) -> [(f64, f64); 7] {
    let (starts, ends) = group_by_weekday_start_end(days);
    let (starts, ends) = (starts.means(), ends.means());
    std::array::from_fn(|weekday| (starts[weekday], ends[weekday]))
}

fn weekday_index(date: &impl Datelike) -> usize {
    date.weekday().num_days_from_monday() as usize
}
