// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presence Analyzer API Server
//!
//! Serves weekday presence statistics computed from the presence log.

use anyhow::Context;
use presence_analyzer::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        port = config.port,
        data_csv = %config.data_csv.display(),
        users_xml = %config.users_xml.display(),
        locale = %config.locale,
        cache = config.cache_enabled,
        "Starting Presence Analyzer"
    );

    // The files are re-read per request; a missing file here is only a warning.
    for path in [&config.data_csv, &config.users_xml] {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Data file not found");
        }
    }

    let state = Arc::new(AppState::new(config.clone()));
    let app = presence_analyzer::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("presence_analyzer=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .try_init()?;
    Ok(())
}
