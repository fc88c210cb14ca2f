//! URL serialization laws.

use crate::strategies::query_state;
use proptest::prelude::*;
use sitesearch::QueryState;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every state survives a trip through the query string.
    #[test]
    fn prop_url_round_trip(state in query_state()) {
        let encoded = state.to_query_string();
        prop_assert_eq!(QueryState::from_query_string(&encoded), state);
    }

    /// The same holds with a leading `?` or a path in front.
    #[test]
    fn prop_url_round_trip_with_path(state in query_state()) {
        let location = format!("/search?{}", state.to_query_string());
        prop_assert_eq!(QueryState::from_query_string(&location), state);
    }

    /// Parsing never panics and always yields a page of at least 1.
    #[test]
    fn prop_parse_is_total(raw in "\\PC{0,64}") {
        let state = QueryState::from_query_string(&raw);
        prop_assert!(state.page >= 1);
    }

    /// Parsed states are already canonical.
    #[test]
    fn prop_serialize_is_canonical(raw in "[a-z=&%+,0-9]{0,40}") {
        let state = QueryState::from_query_string(&raw);
        let again = QueryState::from_query_string(&state.to_query_string());
        prop_assert_eq!(again, state);
    }
}
