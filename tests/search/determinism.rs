//! Rebuilding and re-querying always gives the same answer.

use crate::common::{sample_collections, sample_corpus};
use sitesearch::{build_index, build_index_parallel, normalize, search, QueryState};

const QUERIES: &[&str] = &["docker", "networking container", "rust", "quiz docker", "zzz", ""];

#[test]
fn two_builds_compare_equal() {
    assert_eq!(build_index(sample_corpus()), build_index(sample_corpus()));
}

#[test]
fn two_builds_answer_identically() {
    let first = build_index(sample_corpus());
    let second = build_index(sample_corpus());
    for query in QUERIES {
        let state = QueryState::new(*query);
        assert_eq!(search(&first, &state), search(&second, &state), "query {query:?}");
    }
}

#[test]
fn parallel_build_answers_identically() {
    let sequential = build_index(sample_corpus());
    let parallel = build_index_parallel(sample_corpus());
    assert_eq!(sequential, parallel);
}

#[test]
fn normalization_is_deterministic() {
    let collections = sample_collections();
    assert_eq!(normalize(&collections), normalize(&collections));
}

#[test]
fn repeated_search_is_stable() {
    let index = build_index(sample_corpus());
    let state = QueryState::new("docker networking");
    let first = search(&index, &state);
    for _ in 0..10 {
        assert_eq!(search(&index, &state), first);
    }
}
