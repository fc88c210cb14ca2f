// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of unified search.
//!
//! Posts, guides, quizzes and games all arrive in different shapes. By the time
//! they reach the index they are `ContentDocument`s, and from then on nothing
//! downstream cares which collection a document came from except through its
//! `content_type` tag.
//!
//! # Invariants
//!
//! - **ContentDocument**: `id` is unique across all content types (`type:slug`).
//!   Documents are immutable once indexed; content changes mean a full rebuild.
//!
//! - **Posting**: `doc_id < documents.len()`. Every posting points at a real document.
//!
//! - **PostingList**: `doc_freq == postings.len()`, postings strictly ordered by
//!   `doc_id`. One posting per (document, term) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Ordinal of a document inside one built index.
///
/// Distinct from `ContentDocument::id`: the ordinal is a position in the
/// index's document table and only means something relative to that index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// CONTENT TYPES
// =============================================================================

/// The closed set of searchable content kinds.
///
/// Declaration order is significant: it is the order collections are
/// concatenated during normalization and the order types are written into
/// the `type` URL parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Post,
    Guide,
    Quiz,
    Game,
}

impl ContentType {
    /// All content types in declared order.
    pub const ALL: [ContentType; 4] = [
        ContentType::Post,
        ContentType::Guide,
        ContentType::Quiz,
        ContentType::Game,
    ];

    /// Lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Post => "post",
            ContentType::Guide => "guide",
            ContentType::Quiz => "quiz",
            ContentType::Game => "game",
        }
    }

    /// Route prefix for this type's canonical URLs.
    pub fn route_prefix(self) -> &'static str {
        match self {
            ContentType::Post => "/articles",
            ContentType::Guide => "/guides",
            ContentType::Quiz => "/quizzes",
            ContentType::Game => "/games",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known content type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type '{0}'")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "post" => Ok(ContentType::Post),
            "guide" => Ok(ContentType::Guide),
            "quiz" => Ok(ContentType::Quiz),
            "game" => Ok(ContentType::Game),
            _ => Err(UnknownContentType(s.to_string())),
        }
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// The normalized unit that gets indexed and returned.
///
/// Everything a result needs for display lives here, so a search never has to
/// go back to the source collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    /// Globally unique: `type:slug`.
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Deduplicated, order of first appearance.
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Which document field a match landed in.
///
/// Weights: title (3) > tags (2) > excerpt (1). The derived `Ord` follows
/// weight, so `max()` over a set of fields picks the strongest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Excerpt,
    Tags,
    Title,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::Tags => "tags",
            FieldKind::Excerpt => "excerpt",
        }
    }
}

// =============================================================================
// INDEX TYPES
// =============================================================================

/// One (document, term) pair with its statistics.
///
/// `field` is the highest-weighted field the term occurred in; `term_frequency`
/// sums occurrences across all fields of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub doc_id: DocId,
    pub field: FieldKind,
    pub term_frequency: u32,
}

/// Postings for a single term, ordered by `doc_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingList {
    pub postings: Vec<Posting>,
    /// Number of distinct documents containing the term.
    pub doc_freq: usize,
}

// =============================================================================
// RESULTS
// =============================================================================

/// A ranked hit. Created once per query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub document: ContentDocument,
    pub score: f64,
    /// The field the strongest match came from.
    pub matched_field: FieldKind,
    /// Display snippet taken from `matched_field`.
    pub matched_field_excerpt: String,
}
