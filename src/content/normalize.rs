// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content normalization: four record shapes in, one document shape out.
//!
//! One pure adapter per content type. A record the adapter can't use (no slug,
//! no title, repeated id) is dropped and counted, never fatal. Output order is
//! fixed: posts, guides, quizzes, games, each in source order.

use super::{ContentCollections, GameRecord, GuideRecord, PostRecord, QuizRecord};
use crate::error::MalformedRecord;
use crate::types::{ContentDocument, ContentType};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;
use tracing::{info, warn};

/// Records dropped during normalization, per content type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropCounts {
    pub posts: usize,
    pub guides: usize,
    pub quizzes: usize,
    pub games: usize,
}

impl DropCounts {
    pub fn total(&self) -> usize {
        self.posts + self.guides + self.quizzes + self.games
    }

    pub fn get(&self, kind: ContentType) -> usize {
        match kind {
            ContentType::Post => self.posts,
            ContentType::Guide => self.guides,
            ContentType::Quiz => self.quizzes,
            ContentType::Game => self.games,
        }
    }

    fn record(&mut self, kind: ContentType) {
        match kind {
            ContentType::Post => self.posts += 1,
            ContentType::Guide => self.guides += 1,
            ContentType::Quiz => self.quizzes += 1,
            ContentType::Game => self.games += 1,
        }
    }
}

/// Output of [`normalize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub documents: Vec<ContentDocument>,
    pub dropped: DropCounts,
}

/// Map every collection into documents.
///
/// Deterministic: the same collections always yield the same documents in the
/// same order.
pub fn normalize(collections: &ContentCollections) -> Normalized {
    let mut out = Normalized::default();
    let mut seen: HashSet<String> = HashSet::new();

    let mut accept = |result: Result<ContentDocument, MalformedRecord>, position: usize| {
        let outcome = result.and_then(|doc| {
            if seen.insert(doc.id.clone()) {
                Ok(doc)
            } else {
                Err(MalformedRecord::DuplicateId {
                    kind: doc.content_type,
                    position,
                    id: doc.id,
                })
            }
        });
        match outcome {
            Ok(doc) => out.documents.push(doc),
            Err(reason) => {
                warn!(kind = %reason.kind(), %reason, "dropping content record");
                out.dropped.record(reason.kind());
            }
        }
    };

    for (position, record) in collections.posts.iter().enumerate() {
        accept(normalize_post(record, position), position);
    }
    for (position, record) in collections.guides.iter().enumerate() {
        accept(normalize_guide(record, position), position);
    }
    for (position, record) in collections.quizzes.iter().enumerate() {
        accept(normalize_quiz(record, position), position);
    }
    for (position, record) in collections.games.iter().enumerate() {
        accept(normalize_game(record, position), position);
    }

    info!(
        kept = out.documents.len(),
        dropped = out.dropped.total(),
        dropped_posts = out.dropped.posts,
        dropped_guides = out.dropped.guides,
        dropped_quizzes = out.dropped.quizzes,
        dropped_games = out.dropped.games,
        "normalized content"
    );
    out
}

pub fn normalize_post(
    record: &PostRecord,
    position: usize,
) -> Result<ContentDocument, MalformedRecord> {
    let kind = ContentType::Post;
    let (slug, title) = required(kind, position, &record.slug, &record.title)?;
    Ok(document(
        kind,
        slug,
        title,
        text(&record.excerpt),
        collect_tags(record.tags.iter()),
        text_opt(&record.category),
        record.published_at.as_deref().and_then(parse_timestamp),
    ))
}

pub fn normalize_guide(
    record: &GuideRecord,
    position: usize,
) -> Result<ContentDocument, MalformedRecord> {
    let kind = ContentType::Guide;
    let (slug, title) = required(kind, position, &record.slug, &record.title)?;
    let published_at = record
        .updated_at
        .as_deref()
        .and_then(parse_timestamp)
        .or_else(|| record.published_at.as_deref().and_then(parse_timestamp));
    Ok(document(
        kind,
        slug,
        title,
        text(&record.description),
        collect_tags(record.tags.iter()),
        text_opt(&record.category),
        published_at,
    ))
}

pub fn normalize_quiz(
    record: &QuizRecord,
    position: usize,
) -> Result<ContentDocument, MalformedRecord> {
    let kind = ContentType::Quiz;
    let (slug, title) = required(kind, position, &record.slug, &record.title)?;
    let topic = text_opt(&record.topic);
    Ok(document(
        kind,
        slug,
        title,
        text(&record.description),
        collect_tags(topic.iter()),
        topic.clone(),
        record.published_at.as_deref().and_then(parse_timestamp),
    ))
}

pub fn normalize_game(
    record: &GameRecord,
    position: usize,
) -> Result<ContentDocument, MalformedRecord> {
    let kind = ContentType::Game;
    let (slug, title) = required(kind, position, &record.id, &record.title)?;
    let description = text(&record.description);
    let excerpt = if description.is_empty() {
        text(&record.instructions)
    } else {
        description
    };
    Ok(document(
        kind,
        slug,
        title,
        excerpt,
        collect_tags(record.skills.iter()),
        text_opt(&record.category),
        None,
    ))
}

fn document(
    kind: ContentType,
    slug: String,
    title: String,
    excerpt: String,
    tags: Vec<String>,
    category: Option<String>,
    published_at: Option<DateTime<Utc>>,
) -> ContentDocument {
    ContentDocument {
        id: format!("{}:{}", kind.as_str(), slug),
        content_type: kind,
        url: format!("{}/{}", kind.route_prefix(), slug),
        title,
        excerpt,
        tags,
        category,
        published_at,
    }
}

fn required(
    kind: ContentType,
    position: usize,
    slug: &Option<String>,
    title: &Option<String>,
) -> Result<(String, String), MalformedRecord> {
    let slug = text_opt(slug).ok_or(MalformedRecord::MissingSlug { kind, position })?;
    let title = text_opt(title).ok_or_else(|| MalformedRecord::MissingTitle {
        kind,
        position,
        slug: slug.clone(),
    })?;
    Ok((slug, title))
}

/// Trimmed value, `None` when absent or blank.
fn text_opt(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn text(value: &Option<String>) -> String {
    text_opt(value).unwrap_or_default()
}

/// Trim, drop blanks, keep first occurrence of each tag (case-insensitive).
fn collect_tags<'a>(tags: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC).
///
/// An unparseable date only loses the tie-break; the record is kept.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
        Err(_) => {
            warn!(value = raw, "ignoring unparseable publish date");
            None
        }
    }
}
