//! The reference scenarios over the two-document corpus.

use crate::common::{ids, make_doc, scenario_docs};
use sitesearch::{
    build_index, search, search_with, ContentType, QueryState, SearchConfig, TypeFilter,
};

#[test]
fn scenario_a_single_term_matches_one_document() {
    let index = build_index(scenario_docs());
    let state = QueryState::from_query_string("q=docker");
    assert_eq!(ids(&search(&index, &state)), vec!["post:a"]);
}

#[test]
fn scenario_b_or_semantics_return_both() {
    let index = build_index(scenario_docs());
    let results = search(&index, &QueryState::new("docker kubernetes"));
    assert_eq!(ids(&results), vec!["post:a", "guide:b"]);
    // Equal scores: the title tie-break decides.
    assert_eq!(results[0].score, results[1].score);
}

#[test]
fn scenario_b_more_matched_terms_rank_first() {
    let mut docs = scenario_docs();
    docs.push(make_doc("post:c", ContentType::Post, "Docker on Kubernetes"));
    docs.push(make_doc("post:d", ContentType::Post, "Unrelated"));
    let index = build_index(docs);

    let results = search(&index, &QueryState::new("docker kubernetes"));
    assert_eq!(results[0].document.id, "post:c");
    assert_eq!(results.len(), 3);
}

#[test]
fn scenario_c_type_filter_keeps_guides_only() {
    let index = build_index(scenario_docs());
    let state =
        QueryState::new("docker kubernetes").with_types(TypeFilter::only([ContentType::Guide]));
    assert_eq!(ids(&search(&index, &state)), vec!["guide:b"]);
}

#[test]
fn scenario_d_page_past_end_is_empty_not_error() {
    let index = build_index(scenario_docs());
    let state = QueryState::new("docker").with_page(2);
    let page = search_with(&index, &state, &SearchConfig::default());
    assert!(page.results.is_empty());
    assert_eq!(page.page, 2);
    assert_eq!(page.total_matches, 1);
}
