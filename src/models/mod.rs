// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod directory;
pub mod presence;
pub mod weekday;

pub use directory::{DirectoryUser, Server, UserSummary};
pub use presence::{DayPresence, DayRecord, PresenceTable, UserId, UserPresence};
pub use weekday::WeekdayBuckets;
