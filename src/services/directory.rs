// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User directory loading (names and avatars).

use crate::models::{DirectoryUser, Server, UserId};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Names and avatar locations of known users.
#[derive(Debug, Clone)]
pub struct Directory {
    server: Server,
    users: IndexMap<UserId, DirectoryUser>,
}

// Raw document layout:
// <intranet>
//   <server><protocol>https</protocol><host>…</host></server>
//   <users><user id="141"><name>…</name><avatar>/api/…</avatar></user></users>
// </intranet>
#[derive(Deserialize)]
struct DirectoryXml {
    server: ServerXml,
    users: UsersXml,
}

#[derive(Deserialize)]
struct ServerXml {
    protocol: String,
    host: String,
}

#[derive(Deserialize)]
struct UsersXml {
    #[serde(rename = "user", default)]
    users: Vec<UserXml>,
}

#[derive(Deserialize)]
struct UserXml {
    #[serde(rename = "@id")]
    id: String,
    name: String,
    #[serde(default)]
    avatar: String,
}

impl Directory {
    /// Load the directory from an XML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let xml =
            fs::read_to_string(path.as_ref()).map_err(|e| DirectoryError::IoError(e.to_string()))?;
        Self::from_xml(&xml)
    }

    /// Parse the directory from an XML string.
    ///
    /// Users whose id is not an unsigned integer are dropped.
    pub fn from_xml(xml: &str) -> Result<Self, DirectoryError> {
        let doc: DirectoryXml =
            quick_xml::de::from_str(xml).map_err(|e| DirectoryError::ParseError(e.to_string()))?;

        let mut users = IndexMap::with_capacity(doc.users.users.len());
        for user in doc.users.users {
            let Ok(id) = user.id.trim().parse::<UserId>() else {
                tracing::debug!(id = %user.id, "Skipping directory user with invalid id");
                continue;
            };
            users.insert(
                id,
                DirectoryUser {
                    name: user.name,
                    avatar: user.avatar,
                },
            );
        }

        Ok(Self {
            server: Server {
                protocol: doc.server.protocol,
                host: doc.server.host,
            },
            users,
        })
    }

    /// `(user_id, name)` for every user, in document order.
    pub fn names(&self) -> impl Iterator<Item = (UserId, &str)> {
        self.users.iter().map(|(id, u)| (*id, u.name.as_str()))
    }

    /// Full avatar URL for a user: `protocol://host` followed by the avatar path.
    pub fn avatar_url(&self, user_id: UserId) -> Result<String, DirectoryError> {
        self.users
            .get(&user_id)
            .map(|u| self.server.url_for(&u.avatar))
            .ok_or(DirectoryError::UnknownUser(user_id))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Errors from directory operations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse directory XML: {0}")]
    ParseError(String),

    #[error("User {0} is not in the directory")]
    UnknownUser(UserId),
}
