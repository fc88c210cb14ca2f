// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for URL query string parsing.
//!
//! Whatever lands in the address bar, parsing must not panic, must yield a
//! page of at least 1, and the parsed state must already be canonical.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitesearch::QueryState;

fuzz_target!(|raw: &[u8]| {
    let input = String::from_utf8_lossy(raw);
    let state = QueryState::from_query_string(&input);
    assert!(state.page >= 1);

    let encoded = state.to_query_string();
    assert_eq!(QueryState::from_query_string(&encoded), state);
});
