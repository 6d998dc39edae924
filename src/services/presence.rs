// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presence log parsing.
//!
//! The log is a comma-separated file with one `user_id,date,start,end` row
//! per user and day. Anything else (headers, footers, blank lines, rows that
//! don't parse) is dropped.

use crate::models::{DayRecord, PresenceTable, UserId};
use chrono::{NaiveDate, NaiveTime};
use std::fs;
use std::path::Path;

const FIELDS_PER_ROW: usize = 4;
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Load and parse a presence log from disk.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<PresenceTable> {
    let source = fs::read(path.as_ref())?;
    Ok(parse(&source))
}

/// Parse a presence log into a table keyed by user and date.
///
/// Rows without exactly four fields are skipped silently. Four-field rows
/// that fail to parse are skipped with a debug diagnostic.
pub fn parse(source: &[u8]) -> PresenceTable {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut table = PresenceTable::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping unreadable presence row");
                skipped += 1;
                continue;
            }
        };

        if row.len() != FIELDS_PER_ROW {
            continue;
        }

        let line = row.position().map(|p| p.line()).unwrap_or(0);
        match parse_row(&row[0], &row[1], &row[2], &row[3]) {
            Ok(record) => table.insert(record),
            Err(e) => {
                tracing::debug!(line, error = %e, "Problem with presence row");
                skipped += 1;
            }
        }
    }

    tracing::debug!(users = table.len(), skipped, "Parsed presence log");
    table
}

fn parse_row(user_id: &str, date: &str, start: &str, end: &str) -> Result<DayRecord, RowError> {
    let user_id = user_id
        .parse::<UserId>()
        .map_err(|_| RowError::UserId(user_id.to_string()))?;
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| RowError::Date(date.to_string()))?;
    let start = NaiveTime::parse_from_str(start, TIME_FORMAT)
        .map_err(|_| RowError::Time(start.to_string()))?;
    let end =
        NaiveTime::parse_from_str(end, TIME_FORMAT).map_err(|_| RowError::Time(end.to_string()))?;

    Ok(DayRecord {
        user_id,
        date,
        start,
        end,
    })
}

/// Why a four-field row was rejected.
#[derive(Debug, thiserror::Error)]
enum RowError {
    #[error("invalid user id: {0:?}")]
    UserId(String),

    #[error("invalid date: {0:?}")]
    Date(String),

    #[error("invalid time: {0:?}")]
    Time(String),
}
