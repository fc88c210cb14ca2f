// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The content collaborator boundary.
//!
//! Whatever owns the content (a CMS client, static JSON, a test fixture)
//! implements [`ContentSource`]. It is called once per index build, never
//! during a query.

use super::{ContentCollections, GameRecord, GuideRecord, PostRecord, QuizRecord};
use crate::error::ContentLoadError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn posts(&self) -> Result<Vec<PostRecord>, ContentLoadError>;
    async fn guides(&self) -> Result<Vec<GuideRecord>, ContentLoadError>;
    async fn quizzes(&self) -> Result<Vec<QuizRecord>, ContentLoadError>;
    async fn games(&self) -> Result<Vec<GameRecord>, ContentLoadError>;
}

/// Fetch all four collections concurrently. The first failure wins.
pub async fn fetch_collections(
    source: &dyn ContentSource,
) -> Result<ContentCollections, ContentLoadError> {
    let (posts, guides, quizzes, games) = tokio::try_join!(
        source.posts(),
        source.guides(),
        source.quizzes(),
        source.games()
    )?;
    Ok(ContentCollections {
        posts,
        guides,
        quizzes,
        games,
    })
}

/// An in-memory snapshot is its own source.
#[async_trait]
impl ContentSource for ContentCollections {
    async fn posts(&self) -> Result<Vec<PostRecord>, ContentLoadError> {
        Ok(self.posts.clone())
    }

    async fn guides(&self) -> Result<Vec<GuideRecord>, ContentLoadError> {
        Ok(self.guides.clone())
    }

    async fn quizzes(&self) -> Result<Vec<QuizRecord>, ContentLoadError> {
        Ok(self.quizzes.clone())
    }

    async fn games(&self) -> Result<Vec<GameRecord>, ContentLoadError> {
        Ok(self.games.clone())
    }
}

/// Reads a content JSON file on every fetch, so a retry picks up a fixed file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<ContentCollections, ContentLoadError> {
        ContentCollections::from_json_file(&self.path)
    }
}

#[async_trait]
impl ContentSource for JsonFileSource {
    async fn posts(&self) -> Result<Vec<PostRecord>, ContentLoadError> {
        self.read().map(|c| c.posts)
    }

    async fn guides(&self) -> Result<Vec<GuideRecord>, ContentLoadError> {
        self.read().map(|c| c.guides)
    }

    async fn quizzes(&self) -> Result<Vec<QuizRecord>, ContentLoadError> {
        self.read().map(|c| c.quizzes)
    }

    async fn games(&self) -> Result<Vec<GameRecord>, ContentLoadError> {
        self.read().map(|c| c.games)
    }
}
