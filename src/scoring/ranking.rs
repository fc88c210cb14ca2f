// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.
//!
//! Sort order:
//! 1. **Score** (descending)
//! 2. **Distinct query terms matched** (descending)
//! 3. **Published date** (newest first; undated after dated)
//! 4. **Title** (ascending)
//! 5. **Id** (ascending)
//!
//! Ids are unique, so the last key makes this a total order and result pages
//! are reproducible.

use crate::types::{ContentDocument, DocId, FieldKind};
use std::cmp::Ordering;

/// A candidate after scoring, before it is turned into a `SearchResult`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: f64,
    /// Number of distinct query terms the document contains.
    pub matched_terms: usize,
    /// Strongest field any query term matched in.
    pub matched_field: FieldKind,
}

/// Compare two candidates for ranking. `Less` means `a` ranks first.
pub fn compare_results(a: &ScoredDoc, b: &ScoredDoc, docs: &[ContentDocument]) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.matched_terms.cmp(&a.matched_terms))
        .then_with(|| {
            let a_doc = docs.get(a.doc_id.as_usize());
            let b_doc = docs.get(b.doc_id.as_usize());
            match (a_doc, b_doc) {
                (Some(a_doc), Some(b_doc)) => compare_documents(a_doc, b_doc),
                _ => Ordering::Equal,
            }
        })
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}

/// Tie-break between equally scored documents.
fn compare_documents(a: &ContentDocument, b: &ContentDocument) -> Ordering {
    // `Option` orders None < Some, so reversing puts newest first and undated last.
    b.published_at
        .cmp(&a.published_at)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}
