// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Presence log records and the per-user table built from them.

use chrono::{NaiveDate, NaiveTime};
use indexmap::IndexMap;

/// Canonical user identifier, shared by the presence log and the directory.
pub type UserId = u64;

/// One parsed row of the presence log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Arrival and departure for a single day.
///
/// `start <= end` is not guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPresence {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// All days recorded for one user, in first-seen order.
pub type UserPresence = IndexMap<NaiveDate, DayPresence>;

/// Presence data for every user in the log.
///
/// Users and days keep the order in which they were first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceTable {
    users: IndexMap<UserId, UserPresence>,
}

impl PresenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. A repeated `(user_id, date)` replaces the earlier
    /// value but keeps its position.
    pub fn insert(&mut self, record: DayRecord) {
        self.users.entry(record.user_id).or_default().insert(
            record.date,
            DayPresence {
                start: record.start,
                end: record.end,
            },
        );
    }

    /// Days recorded for a user, if the user appears in the log.
    pub fn get(&self, user_id: UserId) -> Option<&UserPresence> {
        self.users.get(&user_id)
    }

    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.users.contains_key(&user_id)
    }

    /// User ids in first-seen order.
    pub fn user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
