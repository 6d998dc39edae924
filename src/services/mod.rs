// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregate;
pub mod cache;
pub mod directory;
pub mod locale;
pub mod presence;
pub mod source;

pub use directory::{Directory, DirectoryError};
pub use locale::Locale;
pub use source::{DataSources, SourceError};
