//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sitesearch::{
    build_index, check_index, normalize, ContentCollections, GameRecord, GuideRecord, PostRecord,
    QuizRecord, SearchIndex, SearchResult,
};

// Re-export canonical test utilities from sitesearch::testing
#[allow(unused_imports)]
pub use sitesearch::testing::{make_doc, make_doc_with, sample_corpus, scenario_docs};

// ============================================================================
// RECORD BUILDERS
// ============================================================================

pub fn post(slug: &str, title: &str, excerpt: &str, tags: &[&str]) -> PostRecord {
    PostRecord {
        slug: Some(slug.to_string()),
        title: Some(title.to_string()),
        excerpt: Some(excerpt.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..PostRecord::default()
    }
}

pub fn guide(slug: &str, title: &str, description: &str) -> GuideRecord {
    GuideRecord {
        slug: Some(slug.to_string()),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        ..GuideRecord::default()
    }
}

pub fn quiz(slug: &str, title: &str, topic: &str) -> QuizRecord {
    QuizRecord {
        slug: Some(slug.to_string()),
        title: Some(title.to_string()),
        topic: Some(topic.to_string()),
        ..QuizRecord::default()
    }
}

pub fn game(id: &str, title: &str, skills: &[&str]) -> GameRecord {
    GameRecord {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        ..GameRecord::default()
    }
}

// ============================================================================
// CORPORA
// ============================================================================

/// One or two records of every type, all well-formed.
pub fn sample_collections() -> ContentCollections {
    ContentCollections {
        posts: vec![
            post(
                "docker-basics",
                "Docker Basics",
                "Build and run your first container",
                &["docker", "containers"],
            ),
            post("rust-ownership", "Rust Ownership", "Borrowing and moves", &["rust"]),
        ],
        guides: vec![guide(
            "kubernetes-networking",
            "Kubernetes Networking",
            "Services and ingress for container clusters",
        )],
        quizzes: vec![quiz("docker-quiz", "Docker Fundamentals Quiz", "DevOps")],
        games: vec![game("packet-race", "Packet Race", &["networking", "routing"])],
    }
}

pub fn sample_index() -> SearchIndex {
    build_index(normalize(&sample_collections()).documents)
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn ids(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.document.id.as_str()).collect()
}

pub fn assert_index_well_formed(index: &SearchIndex) {
    if let Err(err) = check_index(index) {
        panic!("index invariant violated: {}", err);
    }
}
