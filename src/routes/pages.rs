// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static page shells. Data is fetched client-side from the JSON API.

use crate::AppState;
use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use std::sync::Arc;

const PRESENCE_WEEKDAY_PAGE: &str = include_str!("../../templates/presence_weekday.html");
const MEAN_TIME_WEEKDAY_PAGE: &str = include_str!("../../templates/mean_time_weekday.html");
const PRESENCE_START_END_PAGE: &str = include_str!("../../templates/presence_start_end.html");
const PRESENCE_SCRIPT: &str = include_str!("../../static/presence.js");

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(|| async { Html(PRESENCE_WEEKDAY_PAGE) }))
        .route("/mean_time_weekday", get(|| async { Html(MEAN_TIME_WEEKDAY_PAGE) }))
        .route("/presence_start_end", get(|| async { Html(PRESENCE_START_END_PAGE) }))
        .route("/static/presence.js", get(presence_script))
}

async fn presence_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        PRESENCE_SCRIPT,
    )
}
