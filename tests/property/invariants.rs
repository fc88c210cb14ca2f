//! Structural index invariants and generation staleness.

use crate::common::assert_index_well_formed;
use crate::strategies::corpus;
use proptest::prelude::*;
use sitesearch::{build_index, build_index_parallel, GenerationCounter};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_built_index_well_formed(docs in corpus()) {
        assert_index_well_formed(&build_index(docs));
    }

    /// Feeding the same documents twice still yields unique ids.
    #[test]
    fn prop_duplicates_keep_index_well_formed(docs in corpus()) {
        let mut doubled = docs.clone();
        doubled.extend(docs.clone());
        let index = build_index(doubled);
        prop_assert_eq!(index.total_docs(), docs.len());
        assert_index_well_formed(&index);
    }

    #[test]
    fn prop_parallel_equals_sequential(docs in corpus()) {
        prop_assert_eq!(build_index(docs.clone()), build_index_parallel(docs));
    }

    /// Once a newer generation is issued, every older one is stale.
    #[test]
    fn prop_only_latest_generation_current(issues in 1usize..50) {
        let counter = GenerationCounter::new();
        let issued: Vec<_> = (0..issues).map(|_| counter.issue()).collect();
        let (latest, older) = issued.split_last().unwrap();
        prop_assert!(counter.is_current(*latest));
        for generation in older {
            prop_assert!(!counter.is_current(*generation));
            prop_assert!(generation < latest);
        }
    }
}
