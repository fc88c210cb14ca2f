//! Ranking: field weights, IDF and the tie-break chain.

use crate::common::{ids, make_doc, make_doc_with};
use chrono::{TimeZone, Utc};
use sitesearch::{
    build_index, search, search_with, ContentType, FieldKind, QueryState, SearchConfig,
};

#[test]
fn title_beats_tags_beats_excerpt() {
    let index = build_index(vec![
        make_doc_with("post:excerpt", ContentType::Post, "One", "about docker", &[]),
        make_doc_with("post:tags", ContentType::Post, "Two", "", &["docker"]),
        make_doc_with("post:title", ContentType::Post, "Docker", "", &[]),
        make_doc("post:none", ContentType::Post, "Three"),
    ]);
    let results = search(&index, &QueryState::new("docker"));
    assert_eq!(ids(&results), vec!["post:title", "post:tags", "post:excerpt"]);
    assert_eq!(results[0].matched_field, FieldKind::Title);
    assert_eq!(results[1].matched_field, FieldKind::Tags);
    assert_eq!(results[2].matched_field, FieldKind::Excerpt);
}

#[test]
fn rare_terms_weigh_more_than_common_ones() {
    let index = build_index(vec![
        make_doc("post:a", ContentType::Post, "Rust async"),
        make_doc("post:b", ContentType::Post, "Rust tokio"),
        make_doc("post:c", ContentType::Post, "Rust serde"),
        make_doc("post:d", ContentType::Post, "Go"),
    ]);
    // "tokio" is in one document, "rust" in three.
    let results = search(&index, &QueryState::new("rust tokio"));
    assert_eq!(results[0].document.id, "post:b");
}

#[test]
fn term_in_every_document_still_matches() {
    let index = build_index(vec![
        make_doc("post:a", ContentType::Post, "Rust basics"),
        make_doc("post:b", ContentType::Post, "Rust advanced"),
    ]);
    let results = search(&index, &QueryState::new("rust"));
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.score == 0.0));
}

#[test]
fn newer_documents_win_ties() {
    let mut old = make_doc("post:old", ContentType::Post, "Docker A");
    old.published_at = Some(Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap());
    let mut new = make_doc("post:new", ContentType::Post, "Docker B");
    new.published_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    let undated = make_doc("post:undated", ContentType::Post, "Docker 0");
    let filler = make_doc("post:filler", ContentType::Post, "Filler");

    let index = build_index(vec![old, undated, new, filler]);
    let results = search(&index, &QueryState::new("docker"));
    assert_eq!(ids(&results), vec!["post:new", "post:old", "post:undated"]);
}

#[test]
fn identical_titles_fall_back_to_id() {
    let index = build_index(vec![
        make_doc("quiz:z", ContentType::Quiz, "Docker"),
        make_doc("guide:m", ContentType::Guide, "Docker"),
        make_doc("post:x", ContentType::Post, "Other"),
    ]);
    let results = search(&index, &QueryState::new("docker"));
    assert_eq!(ids(&results), vec!["guide:m", "quiz:z"]);
}

#[test]
fn excerpt_snippet_centers_on_match() {
    let excerpt = "a long introduction that wanders around before it finally mentions \
                   kubernetes and then keeps going for quite a few more words after that";
    let index = build_index(vec![
        make_doc_with("guide:k", ContentType::Guide, "Clusters", excerpt, &[]),
        make_doc("post:x", ContentType::Post, "Other"),
    ]);
    let config = SearchConfig {
        excerpt_words: 6,
        ..SearchConfig::default()
    };
    let page = search_with(&index, &QueryState::new("kubernetes"), &config);
    assert_eq!(
        page.results[0].matched_field_excerpt,
        "…before it finally mentions kubernetes and…"
    );
}
