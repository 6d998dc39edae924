// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Presence Analyzer: employee presence statistics by weekday
//!
//! This crate parses a check-in/check-out log, aggregates it per weekday,
//! and serves the results as a small JSON API with static page shells.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::DataSources;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub sources: DataSources,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sources = DataSources::from_config(&config);
        Self { config, sources }
    }
}
