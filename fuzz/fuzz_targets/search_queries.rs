// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary query text, filters and pages against a fixed mixed corpus.
//! Search must never panic, never return more than a page, and always return
//! results in ranking order that pass the requested filters.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesearch::testing::sample_corpus;
use sitesearch::{build_index, search_with, ContentType, QueryState, SearchConfig, SearchIndex, TypeFilter};
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    type_bits: u8,
    page: u32,
    page_size: u8,
}

fn index() -> &'static SearchIndex {
    static INDEX: OnceLock<SearchIndex> = OnceLock::new();
    INDEX.get_or_init(|| build_index(sample_corpus()))
}

fuzz_target!(|input: Input| {
    let types = ContentType::ALL
        .into_iter()
        .enumerate()
        .filter(|(bit, _)| input.type_bits & (1 << bit) != 0)
        .map(|(_, content_type)| content_type);
    let filter = TypeFilter::only(types);
    let state = QueryState::new(input.query)
        .with_types(filter.clone())
        .with_page(input.page);
    let config = SearchConfig {
        page_size: usize::from(input.page_size).max(1),
        ..SearchConfig::default()
    };

    let page = search_with(index(), &state, &config);
    assert!(page.results.len() <= config.page_size);
    assert!(page.results.iter().all(|r| filter.allows(r.document.content_type)));
    assert!(page.results.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(page.results.iter().all(|r| r.score.is_finite() && r.score >= 0.0));
});
