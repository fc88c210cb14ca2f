// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generation tokens for discarding stale search results.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Tag carried by one issued search. Later searches get larger tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Generation(pub u64);

/// Monotonic source of [`Generation`]s.
///
/// A result may be applied only while its generation is still the latest one
/// issued; anything older is stale. Generation 0 is never issued.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    latest: AtomicU64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next generation, superseding every earlier one.
    pub fn issue(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn latest(&self) -> Generation {
        Generation(self.latest.load(Ordering::Acquire))
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest() == generation
    }
}
