//! Type and category post-filters.

use crate::common::{ids, sample_corpus, sample_index};
use sitesearch::{build_index, search, ContentType, QueryState, TypeFilter};

#[test]
fn all_filter_keeps_every_type() {
    let index = sample_index();
    let results = search(&index, &QueryState::new("docker networking"));
    let types: Vec<ContentType> = results.iter().map(|r| r.document.content_type).collect();
    assert!(types.contains(&ContentType::Post));
    assert!(types.contains(&ContentType::Game));
}

#[test]
fn multi_type_filter() {
    let index = build_index(sample_corpus());
    let state = QueryState::new("docker networking")
        .with_types(TypeFilter::only([ContentType::Quiz, ContentType::Game]));
    let results = search(&index, &state);
    assert!(!results.is_empty());
    assert!(results
        .iter()
        .all(|r| matches!(r.document.content_type, ContentType::Quiz | ContentType::Game)));
}

#[test]
fn filter_is_post_filter_over_same_ranking() {
    let index = build_index(sample_corpus());
    let unfiltered = search(&index, &QueryState::new("docker networking"));
    let filter = TypeFilter::only([ContentType::Guide, ContentType::Game]);
    let filtered = search(
        &index,
        &QueryState::new("docker networking").with_types(filter.clone()),
    );
    assert_eq!(filter.apply(unfiltered), filtered);
}

#[test]
fn category_filter_matches_case_insensitively() {
    let index = build_index(sample_corpus());
    let state = QueryState::new("docker networking").with_category("INFRASTRUCTURE");
    assert_eq!(ids(&search(&index, &state)), vec!["guide:kubernetes-networking"]);
}

#[test]
fn unknown_category_yields_nothing() {
    let index = build_index(sample_corpus());
    let state = QueryState::new("docker").with_category("cooking");
    assert!(search(&index, &state).is_empty());
}

#[test]
fn quiz_topic_acts_as_category() {
    let index = sample_index();
    let state = QueryState::new("docker").with_category("devops");
    assert_eq!(ids(&search(&index, &state)), vec!["quiz:docker-quiz"]);
}
