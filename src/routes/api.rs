// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON API routes.
//!
//! Aggregate endpoints answer `[]` for users that are not in the presence
//! log. Rows are always emitted Monday first.

use crate::error::Result;
use crate::models::{UserId, UserSummary};
use crate::services::aggregate::{group_by_weekday, mean_start_end};
use crate::services::Locale;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

const PRESENCE_HEADER: (&str, &str) = ("Weekday", "Presence (s)");

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/users", get(get_users))
        .route("/api/v1/get_avatar/{user_id}", get(get_avatar))
        .route("/api/v1/mean_time_weekday/{user_id}", get(get_mean_time_weekday))
        .route("/api/v1/presence_weekday/{user_id}", get(get_presence_weekday))
        .route("/api/v1/presence_start_end/{user_id}", get(get_presence_start_end))
}

// ─── Users ───────────────────────────────────────────────────

/// Users listing for the dropdown: directory entries that have presence
/// data, sorted by name.
async fn get_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserSummary>>> {
    let (directory, presence) =
        tokio::try_join!(state.sources.directory(), state.sources.presence())?;

    let mut users: Vec<UserSummary> = directory
        .names()
        .filter(|(user_id, _)| presence.contains_user(*user_id))
        .map(|(user_id, name)| UserSummary {
            user_id,
            name: name.to_string(),
        })
        .collect();

    let locale = state.config.locale;
    users.sort_by(|a, b| locale.compare(&a.name, &b.name));

    Ok(Json(users))
}

/// Full avatar URL for a user.
async fn get_avatar(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<String>> {
    let directory = state.sources.directory().await?;
    Ok(Json(directory.avatar_url(user_id)?))
}

// ─── Weekday Aggregates ──────────────────────────────────────

/// Row of the total presence listing: a header, then one row per weekday.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PresenceRow {
    Header(&'static str, &'static str),
    Day(&'static str, i64),
}

/// Mean time in office per weekday.
async fn get_mean_time_weekday(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<(&'static str, f64)>>> {
    let presence = state.sources.presence().await?;
    let Some(days) = presence.get(user_id) else {
        tracing::debug!(user_id, "User not found");
        return Ok(Json(vec![]));
    };

    let means = group_by_weekday(days).means();
    Ok(Json(label(state.config.locale, means)))
}

/// Total time in office per weekday, preceded by a header row.
async fn get_presence_weekday(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<PresenceRow>>> {
    let presence = state.sources.presence().await?;
    let Some(days) = presence.get(user_id) else {
        tracing::debug!(user_id, "User not found");
        return Ok(Json(vec![]));
    };

    let sums = group_by_weekday(days).sums();
    let mut rows = vec![PresenceRow::Header(PRESENCE_HEADER.0, PRESENCE_HEADER.1)];
    rows.extend(
        label(state.config.locale, sums)
            .into_iter()
            .map(|(weekday, total)| PresenceRow::Day(weekday, total)),
    );
    Ok(Json(rows))
}

/// Mean arrival and departure (seconds since midnight) per weekday.
async fn get_presence_start_end(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<(&'static str, f64, f64)>>> {
    let presence = state.sources.presence().await?;
    let Some(days) = presence.get(user_id) else {
        tracing::debug!(user_id, "User not found");
        return Ok(Json(vec![]));
    };

    let rows = label(state.config.locale, mean_start_end(days))
        .into_iter()
        .map(|(weekday, (start, end))| (weekday, start, end))
        .collect();
    Ok(Json(rows))
}

/// Pair each per-weekday value with its weekday label, Monday first.
fn label<T>(locale: Locale, values: [T; 7]) -> Vec<(&'static str, T)> {
    values
        .into_iter()
        .enumerate()
        .map(|(weekday, value)| (locale.weekday_abbr(weekday), value))
        .collect()
}
