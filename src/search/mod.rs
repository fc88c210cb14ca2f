// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query processing: tokens in, ranked page out.
//!
//! 1. Tokenize the query with the indexing tokenizer (distinct terms only).
//! 2. Every document with a posting for at least one term is a candidate (OR).
//! 3. Score: Σ field_weight × tf × idf over the matched terms.
//! 4. Post-filter by type and category. Filters never touch the index, so
//!    changing them is a cheap set intersection, not a rebuild.
//! 5. Sort with the total order from `scoring::ranking`, then slice the page.
//!
//! Every step is total: an empty query, a query of only stop words, an empty
//! index or a page past the end all give an empty page, never an error.

pub mod excerpt;

use crate::config::SearchConfig;
use crate::index::{fold, query_terms, SearchIndex};
use crate::scoring::ranking::{compare_results, ScoredDoc};
use crate::scoring::{inverse_document_frequency, term_score};
use crate::state::QueryState;
use crate::types::{ContentDocument, DocId, SearchResult};
use serde::Serialize;
use std::collections::BTreeMap;

pub use excerpt::matched_field_excerpt;

/// One page of ranked results plus what the presenter needs for paging.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub results: Vec<SearchResult>,
    /// Matches across all pages, after filtering.
    pub total_matches: usize,
    pub page: u32,
    pub page_count: u32,
}

/// Search with the default configuration and return the requested page.
pub fn search(index: &SearchIndex, state: &QueryState) -> Vec<SearchResult> {
    search_with(index, state, &SearchConfig::default()).results
}

/// Search and return the requested page along with paging totals.
pub fn search_with(index: &SearchIndex, state: &QueryState, config: &SearchConfig) -> SearchPage {
    let page = state.page.max(1);
    let terms = query_terms(&state.query);
    if terms.is_empty() || index.is_empty() {
        return SearchPage {
            page,
            ..SearchPage::default()
        };
    }

    let docs = index.documents();
    let mut ranked: Vec<ScoredDoc> = score_candidates(index, &terms)
        .into_iter()
        .filter(|scored| {
            docs.get(scored.doc_id.as_usize())
                .is_some_and(|doc| passes_filters(doc, state))
        })
        .collect();
    ranked.sort_by(|a, b| compare_results(a, b, docs));

    let total_matches = ranked.len();
    let page_size = config.page_size.max(1);
    let page_count = total_matches.div_ceil(page_size) as u32;
    let start = (page as usize - 1).saturating_mul(page_size);

    let results = ranked
        .iter()
        .skip(start)
        .take(page_size)
        .filter_map(|scored| to_result(index, scored, &terms, config))
        .collect();

    SearchPage {
        results,
        total_matches,
        page,
        page_count,
    }
}

/// Score every document matching at least one term, in document order.
///
/// Terms are visited in query order and postings in document order, so the
/// floating-point sums are reproducible.
pub fn score_candidates(index: &SearchIndex, terms: &[String]) -> Vec<ScoredDoc> {
    let total_docs = index.total_docs();
    let mut candidates: BTreeMap<DocId, ScoredDoc> = BTreeMap::new();

    for term in terms {
        let Some(list) = index.postings(term) else {
            continue;
        };
        let idf = inverse_document_frequency(total_docs, list.doc_freq);
        for posting in &list.postings {
            let candidate = candidates.entry(posting.doc_id).or_insert(ScoredDoc {
                doc_id: posting.doc_id,
                score: 0.0,
                matched_terms: 0,
                matched_field: posting.field,
            });
            candidate.score += term_score(posting, idf);
            candidate.matched_terms += 1;
            candidate.matched_field = candidate.matched_field.max(posting.field);
        }
    }

    candidates.into_values().collect()
}

/// Type filter plus optional category match, folded like indexed terms.
pub fn passes_filters(doc: &ContentDocument, state: &QueryState) -> bool {
    if !state.type_filter.allows(doc.content_type) {
        return false;
    }
    match state.category.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(wanted) => {
            let wanted = fold(wanted);
            doc.category
                .as_deref()
                .is_some_and(|category| fold(category.trim()) == wanted)
        }
    }
}

fn to_result(
    index: &SearchIndex,
    scored: &ScoredDoc,
    terms: &[String],
    config: &SearchConfig,
) -> Option<SearchResult> {
    let document = index.document(scored.doc_id)?;
    let field = scored.matched_field;
    Some(SearchResult {
        matched_field_excerpt: matched_field_excerpt(document, field, terms, config.excerpt_words),
        matched_field: field,
        score: scored.score,
        document: document.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use crate::state::TypeFilter;
    use crate::testing::{make_doc, make_doc_with};
    use crate::types::{ContentType, FieldKind};

    fn scenario_index() -> SearchIndex {
        build_index(vec![
            make_doc("post:a", ContentType::Post, "Docker Basics"),
            make_doc("guide:b", ContentType::Guide, "Kubernetes Networking"),
        ])
    }

    fn ids(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.document.id.as_str()).collect()
    }

    #[test]
    fn single_term_matches_only_its_document() {
        let results = search(&scenario_index(), &QueryState::new("docker"));
        assert_eq!(ids(&results), vec!["post:a"]);
    }

    #[test]
    fn or_semantics_return_partial_matches() {
        let results = search(&scenario_index(), &QueryState::new("docker kubernetes"));
        assert_eq!(ids(&results), vec!["post:a", "guide:b"]);
    }

    #[test]
    fn type_filter_is_post_filter() {
        let state = QueryState::new("docker kubernetes")
            .with_types(TypeFilter::only([ContentType::Guide]));
        assert_eq!(ids(&search(&scenario_index(), &state)), vec!["guide:b"]);
    }

    #[test]
    fn page_past_end_is_empty() {
        let state = QueryState::new("docker").with_page(2);
        let page = search_with(&scenario_index(), &state, &SearchConfig::default());
        assert!(page.results.is_empty());
        assert_eq!(page.total_matches, 1);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn blank_and_stop_word_queries_are_empty() {
        let index = scenario_index();
        assert!(search(&index, &QueryState::new("")).is_empty());
        assert!(search(&index, &QueryState::new("   ")).is_empty());
        assert!(search(&index, &QueryState::new("the of")).is_empty());
    }

    #[test]
    fn empty_index_is_empty() {
        let index = build_index(vec![]);
        assert!(search(&index, &QueryState::new("docker")).is_empty());
    }

    #[test]
    fn more_matched_terms_score_higher() {
        let index = build_index(vec![
            make_doc("post:a", ContentType::Post, "Rust async runtime"),
            make_doc("post:b", ContentType::Post, "Rust ownership"),
            make_doc("post:c", ContentType::Post, "Go channels"),
        ]);
        let results = search(&index, &QueryState::new("rust async"));
        assert_eq!(ids(&results), vec!["post:a", "post:b"]);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn title_match_outranks_excerpt_match() {
        let index = build_index(vec![
            make_doc_with("post:x", ContentType::Post, "Containers", "all about docker", &[]),
            make_doc("post:y", ContentType::Post, "Docker"),
            make_doc("post:z", ContentType::Post, "Unrelated"),
        ]);
        let results = search(&index, &QueryState::new("docker"));
        assert_eq!(ids(&results), vec!["post:y", "post:x"]);
        assert_eq!(results[0].matched_field, FieldKind::Title);
        assert_eq!(results[1].matched_field, FieldKind::Excerpt);
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let mut devops = make_doc("post:a", ContentType::Post, "Docker");
        devops.category = Some("DevOps".to_string());
        let other = make_doc("post:b", ContentType::Post, "Docker compose");
        let index = build_index(vec![devops, other]);

        let state = QueryState::new("docker").with_category("devops");
        assert_eq!(ids(&search(&index, &state)), vec!["post:a"]);
    }

    #[test]
    fn category_filter_folds_non_ascii_case() {
        let mut cafe = make_doc("post:a", ContentType::Post, "Espresso");
        cafe.category = Some("Café".to_string());
        let index = build_index(vec![cafe]);

        let state = QueryState::new("espresso").with_category("CAFÉ");
        assert_eq!(ids(&search(&index, &state)), vec!["post:a"]);
    }

    #[test]
    fn pagination_slices_ranked_results() {
        let docs: Vec<_> = (0..25)
            .map(|i| make_doc(&format!("post:{:02}", i), ContentType::Post, &format!("Rust {:02}", i)))
            .collect();
        let index = build_index(docs);
        let config = SearchConfig {
            page_size: 10,
            ..SearchConfig::default()
        };

        let first = search_with(&index, &QueryState::new("rust"), &config);
        let third = search_with(&index, &QueryState::new("rust").with_page(3), &config);
        assert_eq!(first.results.len(), 10);
        assert_eq!(third.results.len(), 5);
        assert_eq!(first.page_count, 3);
        assert_eq!(first.total_matches, 25);
        assert_eq!(first.results[0].document.id, "post:00");
        assert_eq!(third.results[4].document.id, "post:24");
    }

    #[test]
    fn repeated_query_term_counts_once() {
        let index = scenario_index();
        let once = search(&index, &QueryState::new("docker"));
        let twice = search(&index, &QueryState::new("docker docker"));
        assert_eq!(once[0].score, twice[0].score);
    }
}
