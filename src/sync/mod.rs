// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query state synchronizer.
//!
//! Keeps typed input, the committed [`QueryState`](crate::state::QueryState)
//! and the URL query string consistent, and decides when a search runs.
//!
//! # Invariants
//!
//! - **LATEST_WINS**: a search result reaches the snapshot only if its
//!   generation is the latest issued. Older results are counted and dropped.
//! - **DEBOUNCED_TYPING**: typed text commits once input is quiet for
//!   `SearchConfig::debounce_ms`; bursts commit once.
//! - **DIRECT_NAVIGATION**: `navigate` and filter/page changes never wait on
//!   the debounce timer.

mod debounce;
mod generation;
mod view;

pub use debounce::Debouncer;
pub use generation::{Generation, GenerationCounter};
pub use view::{SearchView, ViewSnapshot, ViewStats};
