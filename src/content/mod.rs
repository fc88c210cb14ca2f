// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content records as the site's collaborators hand them over.
//!
//! Each content type keeps its own record shape. There is no shared base
//! record: the adapters in [`normalize`] map each shape into a
//! [`ContentDocument`](crate::types::ContentDocument) independently.
//!
//! Slugs and titles are `Option` here on purpose so a record missing them
//! still deserializes and can be counted as dropped instead of failing the
//! whole collection.

pub mod normalize;
pub mod source;

use crate::error::ContentLoadError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use normalize::*;
pub use source::*;

/// Article / blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostRecord {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub published_at: Option<String>,
}

/// Long-form guide. Guides are revised, so `updated_at` wins over `published_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuideRecord {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub published_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizRecord {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Becomes both the category and a tag.
    pub topic: Option<String>,
    pub question_count: Option<u32>,
    pub published_at: Option<String>,
}

/// Interactive exercise. Games are addressed by `id` rather than slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub skills: Vec<String>,
    pub category: Option<String>,
}

/// One snapshot of every collection the search covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentCollections {
    pub posts: Vec<PostRecord>,
    pub guides: Vec<GuideRecord>,
    pub quizzes: Vec<QuizRecord>,
    pub games: Vec<GameRecord>,
}

impl ContentCollections {
    /// Total records across all collections, malformed ones included.
    pub fn len(&self) -> usize {
        self.posts.len() + self.guides.len() + self.quizzes.len() + self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a `{ "posts": [...], "guides": [...], ... }` snapshot from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, ContentLoadError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ContentLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
