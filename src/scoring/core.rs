// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! A document's score is the sum, over the query terms it contains, of
//!
//! ```text
//! field_weight × term_frequency × ln(N / df)
//! ```
//!
//! Plain term frequency would reward long, keyword-stuffed excerpts. The IDF
//! factor damps terms that appear everywhere, and the field weight makes a
//! precise title hit worth more than a passing mention in an excerpt.
//!
//! # Key Invariant: Non-negative Contributions
//!
//! `df ≤ N` always holds for an indexed term, so `ln(N / df) ≥ 0` and every
//! term contribution is `≥ 0`. Adding a query term a document contains can
//! therefore never lower its score.
//!
//! # Constants
//!
//! | Field   | Weight |
//! |---------|--------|
//! | Title   | 3      |
//! | Tags    | 2      |
//! | Excerpt | 1      |

use crate::types::{FieldKind, Posting};

/// Weight for matches in the document title.
pub const TITLE_WEIGHT: u32 = 3;

/// Weight for matches in tags.
pub const TAGS_WEIGHT: u32 = 2;

/// Weight for matches in the excerpt.
pub const EXCERPT_WEIGHT: u32 = 1;

/// Fields in the order they are tokenized.
pub const FIELD_ORDER: [FieldKind; 3] = [FieldKind::Title, FieldKind::Tags, FieldKind::Excerpt];

/// Weight by field: Title (3) > Tags (2) > Excerpt (1).
#[inline]
pub fn field_weight(field: FieldKind) -> u32 {
    match field {
        FieldKind::Title => TITLE_WEIGHT,
        FieldKind::Tags => TAGS_WEIGHT,
        FieldKind::Excerpt => EXCERPT_WEIGHT,
    }
}

/// `ln(total_docs / doc_freq)`, or 0 when either side is zero.
#[inline]
pub fn inverse_document_frequency(total_docs: usize, doc_freq: usize) -> f64 {
    if total_docs == 0 || doc_freq == 0 {
        return 0.0;
    }
    (total_docs as f64 / doc_freq as f64).ln().max(0.0)
}

/// One term's contribution to a document's score.
#[inline]
pub fn term_score(posting: &Posting, idf: f64) -> f64 {
    f64::from(field_weight(posting.field)) * f64::from(posting.term_frequency) * idf
}
