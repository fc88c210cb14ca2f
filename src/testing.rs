// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{ContentDocument, ContentType, FieldKind, SearchResult};

/// Slug part of a `type:slug` id, or the whole id if it has no prefix.
fn slug_of(id: &str) -> &str {
    id.split_once(':').map_or(id, |(_, slug)| slug)
}

/// A document with only a title: empty excerpt, no tags, no date or category.
pub fn make_doc(id: &str, content_type: ContentType, title: &str) -> ContentDocument {
    make_doc_with(id, content_type, title, "", &[])
}

/// A document with title, excerpt and tags.
pub fn make_doc_with(
    id: &str,
    content_type: ContentType,
    title: &str,
    excerpt: &str,
    tags: &[&str],
) -> ContentDocument {
    ContentDocument {
        id: id.to_string(),
        content_type,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        url: format!("{}/{}", content_type.route_prefix(), slug_of(id)),
        category: None,
        published_at: None,
    }
}

/// A result wrapping a bare document, for filter tests that ignore scoring.
pub fn result_for(id: &str, content_type: ContentType) -> SearchResult {
    let document = make_doc(id, content_type, id);
    SearchResult {
        matched_field_excerpt: document.title.clone(),
        document,
        score: 1.0,
        matched_field: FieldKind::Title,
    }
}

/// The two-document corpus used throughout the search scenarios.
pub fn scenario_docs() -> Vec<ContentDocument> {
    vec![
        make_doc("post:a", ContentType::Post, "Docker Basics"),
        make_doc("guide:b", ContentType::Guide, "Kubernetes Networking"),
    ]
}

/// A mixed corpus with every content type, tags, excerpts and categories.
pub fn sample_corpus() -> Vec<ContentDocument> {
    let mut docs = vec![
        make_doc_with(
            "post:docker-basics",
            ContentType::Post,
            "Docker Basics",
            "Build and run your first container image with docker",
            &["docker", "containers"],
        ),
        make_doc_with(
            "post:rust-ownership",
            ContentType::Post,
            "Understanding Rust Ownership",
            "Borrowing, lifetimes and moves explained with small examples",
            &["rust"],
        ),
        make_doc_with(
            "guide:kubernetes-networking",
            ContentType::Guide,
            "Kubernetes Networking",
            "Services, ingress and network policies for container clusters",
            &["kubernetes", "networking"],
        ),
        make_doc_with(
            "guide:linux-shell",
            ContentType::Guide,
            "Linux Shell Survival Guide",
            "Pipes, redirection and job control for everyday work",
            &["linux", "shell"],
        ),
        make_doc_with(
            "quiz:docker-fundamentals",
            ContentType::Quiz,
            "Docker Fundamentals Quiz",
            "Ten questions on images, volumes and networking",
            &["docker"],
        ),
        make_doc_with(
            "game:packet-race",
            ContentType::Game,
            "Packet Race",
            "Route packets through a network before the timer runs out",
            &["networking", "routing"],
        ),
    ];
    for doc in &mut docs {
        let category = match doc.content_type {
            ContentType::Post | ContentType::Quiz => "devops",
            ContentType::Guide => "infrastructure",
            ContentType::Game => "networking",
        };
        doc.category = Some(category.to_string());
    }
    docs
}
