// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Per-weekday groupings of second offsets.

use crate::time_utils::mean;

/// Number of weekdays; index 0 is Monday.
pub const WEEKDAYS: usize = 7;

/// Seven ordered sequences of seconds, one per weekday (0=Monday..6=Sunday).
///
/// Weekdays without records hold an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdayBuckets {
    buckets: [Vec<i64>; WEEKDAYS],
}

impl WeekdayBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the bucket for `weekday`.
    ///
    /// # Panics
    ///
    /// Panics if `weekday >= 7`.
    pub fn push(&mut self, weekday: usize, value: i64) {
        self.buckets[weekday].push(value);
    }

    /// Values for one weekday, in insertion order.
    pub fn get(&self, weekday: usize) -> &[i64] {
        self.buckets.get(weekday).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Buckets in weekday order, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[i64])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(weekday, values)| (weekday, values.as_slice()))
    }

    /// Mean of each bucket, Monday first. Empty buckets give `0.0`.
    pub fn means(&self) -> [f64; WEEKDAYS] {
        std::array::from_fn(|weekday| mean(&self.buckets[weekday]))
    }

    /// Sum of each bucket, Monday first. Empty buckets give `0`.
    pub fn sums(&self) -> [i64; WEEKDAYS] {
        std::array::from_fn(|weekday| self.buckets[weekday].iter().sum())
    }
}
