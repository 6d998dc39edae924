// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot cache keyed by file path and modification time.
//!
//! Values are built completely before they are published, and published
//! values are immutable `Arc`s, so concurrent readers see either the old
//! snapshot or the new one.

use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

struct Snapshot<T> {
    modified: SystemTime,
    value: Arc<T>,
}

/// Parsed file contents, reused while the file is unchanged.
pub struct SnapshotCache<T> {
    entries: DashMap<PathBuf, Snapshot<T>>,
}

impl<T> Default for SnapshotCache<T> {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl<T> SnapshotCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `path` if it was built from the same modification time.
    pub fn get(&self, path: &Path, modified: SystemTime) -> Option<Arc<T>> {
        self.entries
            .get(path)
            .filter(|snapshot| snapshot.modified == modified)
            .map(|snapshot| Arc::clone(&snapshot.value))
    }

    /// Publish a fully built value, replacing any older snapshot.
    pub fn publish(&self, path: &Path, modified: SystemTime, value: Arc<T>) {
        self.entries
            .insert(path.to_path_buf(), Snapshot { modified, value });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
