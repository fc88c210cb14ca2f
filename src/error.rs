// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only three things can go wrong in this crate: content fails to load, a
//! single record is malformed, or a config file is bad. Malformed query state
//! never surfaces as an error; URL parsing falls back to defaults instead.

use crate::types::ContentType;
use std::path::PathBuf;
use thiserror::Error;

/// The content collaborator could not deliver its collections.
///
/// Recoverable: the search view keeps the error and a retry re-runs the load.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read content from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("content source unavailable: {0}")]
    Unavailable(String),
}

/// A single record that could not be normalized. Counted and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    #[error("{kind} record #{position} has no slug")]
    MissingSlug { kind: ContentType, position: usize },

    #[error("{kind} record #{position} ('{slug}') has no title")]
    MissingTitle {
        kind: ContentType,
        position: usize,
        slug: String,
    },

    #[error("{kind} record #{position} repeats id '{id}'")]
    DuplicateId {
        kind: ContentType,
        position: usize,
        id: String,
    },
}

impl MalformedRecord {
    pub fn kind(&self) -> ContentType {
        match self {
            MalformedRecord::MissingSlug { kind, .. }
            | MalformedRecord::MissingTitle { kind, .. }
            | MalformedRecord::DuplicateId { kind, .. } => *kind,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
