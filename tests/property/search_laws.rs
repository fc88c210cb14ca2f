//! Determinism, filter idempotence, the empty query law and monotonic coverage.

use crate::strategies::{corpus, text, type_filter, word};
use proptest::prelude::*;
use sitesearch::{build_index, search, search_with, QueryState, SearchConfig};

/// Large enough that every match lands on page 1.
fn everything() -> SearchConfig {
    SearchConfig {
        page_size: 1000,
        ..SearchConfig::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Two builds over the same documents answer every query identically.
    #[test]
    fn prop_search_deterministic(docs in corpus(), query in text(3)) {
        let first = build_index(docs.clone());
        let second = build_index(docs);
        let state = QueryState::new(query);
        prop_assert_eq!(search(&first, &state), search(&second, &state));
    }

    /// Filtering an already filtered result list changes nothing.
    #[test]
    fn prop_filter_idempotent(docs in corpus(), query in text(3), filter in type_filter()) {
        let index = build_index(docs);
        let results = search_with(&index, &QueryState::new(query), &everything()).results;
        let once = filter.apply(results);
        let twice = filter.apply(once.clone());
        prop_assert_eq!(once, twice);
    }

    /// The query-side filter equals filtering the unfiltered ranking.
    #[test]
    fn prop_filter_is_post_filter(docs in corpus(), query in text(3), filter in type_filter()) {
        let index = build_index(docs);
        let unfiltered = search_with(&index, &QueryState::new(query.clone()), &everything());
        let filtered = search_with(
            &index,
            &QueryState::new(query).with_types(filter.clone()),
            &everything(),
        );
        prop_assert_eq!(filter.apply(unfiltered.results), filtered.results);
    }

    /// Blank queries return nothing whatever the index holds.
    #[test]
    fn prop_empty_query_is_empty(docs in corpus(), blanks in "[ \t\n]{0,6}", filter in type_filter()) {
        let index = build_index(docs);
        let state = QueryState::new(blanks).with_types(filter);
        prop_assert!(search(&index, &state).is_empty());
    }

    /// Adding a token the document contains never lowers its score.
    #[test]
    fn prop_monotonic_token_coverage(docs in corpus(), query in text(3), extra in word()) {
        let index = build_index(docs);
        let before = search_with(&index, &QueryState::new(query.clone()), &everything()).results;
        let widened = format!("{} {}", query, extra);
        let after = search_with(&index, &QueryState::new(widened), &everything()).results;

        for result in &before {
            let Some(again) = after.iter().find(|r| r.document.id == result.document.id) else {
                return Err(TestCaseError::fail(format!(
                    "{} dropped out after adding {:?}",
                    result.document.id, extra
                )));
            };
            prop_assert!(
                again.score >= result.score,
                "{} went from {} to {} after adding {:?}",
                result.document.id, result.score, again.score, extra
            );
        }
    }

    /// Consecutive pages tile the full ranking without gaps or overlap.
    #[test]
    fn prop_pages_tile_ranking(docs in corpus(), query in text(3), page_size in 1usize..5) {
        let index = build_index(docs);
        let full = search_with(&index, &QueryState::new(query.clone()), &everything()).results;
        let config = SearchConfig { page_size, ..SearchConfig::default() };

        let first = search_with(&index, &QueryState::new(query.clone()), &config);
        let mut stitched = Vec::new();
        for page in 1..=first.page_count + 1 {
            let state = QueryState::new(query.clone()).with_page(page);
            stitched.extend(search_with(&index, &state, &config).results);
        }
        prop_assert_eq!(stitched, full);
    }
}
