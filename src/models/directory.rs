// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User directory model.

use super::presence::UserId;
use serde::Serialize;

/// A person listed in the user directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryUser {
    /// Display name
    pub name: String,
    /// Avatar path on the intranet server (e.g., "/api/images/users/141")
    pub avatar: String,
}

/// Intranet server that hosts the avatars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub protocol: String,
    pub host: String,
}

impl Server {
    /// Full URL for a path on this server.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}://{}{}", self.protocol, self.host, path)
    }
}

/// Entry of the users dropdown listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub user_id: UserId,
    pub name: String,
}
