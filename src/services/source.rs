// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-request access to the presence log and the user directory.
//!
//! Without caching every call re-reads and re-parses the file. With caching,
//! a parsed snapshot is reused until the file's modification time changes.

use crate::config::Config;
use crate::models::PresenceTable;
use crate::services::cache::SnapshotCache;
use crate::services::directory::{Directory, DirectoryError};
use crate::services::presence;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Reads the configured data files on demand.
pub struct DataSources {
    presence_path: PathBuf,
    directory_path: PathBuf,
    caches: Option<Caches>,
}

#[derive(Default)]
struct Caches {
    presence: SnapshotCache<PresenceTable>,
    directory: SnapshotCache<Directory>,
}

impl DataSources {
    pub fn new(presence_path: PathBuf, directory_path: PathBuf, cache_enabled: bool) -> Self {
        Self {
            presence_path,
            directory_path,
            caches: cache_enabled.then(Caches::default),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.data_csv.clone(),
            config.users_xml.clone(),
            config.cache_enabled,
        )
    }

    /// The presence table for the current log contents.
    pub async fn presence(&self) -> Result<Arc<PresenceTable>, SourceError> {
        let cache = self.caches.as_ref().map(|c| &c.presence);
        load(&self.presence_path, cache, |bytes| Ok(presence::parse(&bytes))).await
    }

    /// The user directory for the current file contents.
    pub async fn directory(&self) -> Result<Arc<Directory>, SourceError> {
        let cache = self.caches.as_ref().map(|c| &c.directory);
        load(&self.directory_path, cache, |bytes| {
            let xml = std::str::from_utf8(&bytes)
                .map_err(|e| DirectoryError::ParseError(e.to_string()))?;
            Ok(Directory::from_xml(xml)?)
        })
        .await
    }
}

async fn load<T, F>(
    path: &Path,
    cache: Option<&SnapshotCache<T>>,
    build: F,
) -> Result<Arc<T>, SourceError>
where
    T: Send + 'static,
    F: FnOnce(Vec<u8>) -> Result<T, SourceError> + Send + 'static,
{
    let Some(cache) = cache else {
        let bytes = read(path).await?;
        return Ok(Arc::new(build_blocking(bytes, build).await?));
    };

    let modified = metadata(path)
        .await?
        .modified()
        .map_err(|e| SourceError::io(path, e))?;

    if let Some(value) = cache.get(path, modified) {
        tracing::trace!(path = %path.display(), "Snapshot cache hit");
        return Ok(value);
    }

    let bytes = read(path).await?;
    let after = metadata(path).await?;
    let settled = is_settled(modified, &after, bytes.len());
    let value = Arc::new(build_blocking(bytes, build).await?);

    if settled {
        cache.publish(path, modified, Arc::clone(&value));
        tracing::debug!(path = %path.display(), "Published new snapshot");
    } else {
        tracing::debug!(path = %path.display(), "File changed while reading, snapshot not cached");
    }
    Ok(value)
}

// Parsing is CPU-bound, keep it off the async workers.
async fn build_blocking<T, F>(bytes: Vec<u8>, build: F) -> Result<T, SourceError>
where
    T: Send + 'static,
    F: FnOnce(Vec<u8>) -> Result<T, SourceError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || build(bytes)).await?
}

/// True if the file still has the modification time seen before the read
/// and its length matches the bytes that were read.
fn is_settled(modified: SystemTime, after: &Metadata, read_len: usize) -> bool {
    after.modified().ok() == Some(modified) && after.len() == read_len as u64
}

async fn metadata(path: &Path) -> Result<Metadata, SourceError> {
    tokio::fs::metadata(path)
        .await
        .map_err(|e| SourceError::io(path, e))
}

async fn read(path: &Path) -> Result<Vec<u8>, SourceError> {
    tokio::fs::read(path)
        .await
        .map_err(|e| SourceError::io(path, e))
}

/// Failure to produce a data snapshot. Fatal for the request.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Parse task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl SourceError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        SourceError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
